use crate::core::data::pixel::Pixel;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RasterProjectionError {
    DegenerateViewport { viewport: Viewport },
}

impl fmt::Display for RasterProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateViewport { viewport } => {
                write!(
                    f,
                    "viewport has no area: x [{}, {}], y [{}, {}]",
                    viewport.x_min, viewport.x_max, viewport.y_min, viewport.y_max
                )
            }
        }
    }
}

impl Error for RasterProjectionError {}

/// Projects world-space points into a raster rectangle.
///
/// Both axes share one scale (the smaller of the two candidates) and the
/// mapped viewport is centred in the rect, so curves keep their aspect
/// ratio. World y grows upward, raster y downward.
#[derive(Debug, Copy, Clone)]
pub struct RasterProjection {
    viewport: Viewport,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl RasterProjection {
    pub fn new(viewport: Viewport, rect: PixelRect) -> Result<Self, RasterProjectionError> {
        if viewport.is_degenerate() {
            return Err(RasterProjectionError::DegenerateViewport { viewport });
        }

        let span_x = f64::from(rect.width() - 1);
        let span_y = f64::from(rect.height() - 1);
        let scale = (span_x / viewport.width()).min(span_y / viewport.height());

        let offset_x =
            f64::from(rect.top_left().x) + (span_x - viewport.width() * scale) / 2.0;
        let offset_y =
            f64::from(rect.top_left().y) + (span_y - viewport.height() * scale) / 2.0;

        Ok(Self {
            viewport,
            scale,
            offset_x,
            offset_y,
        })
    }

    /// Continuous raster coordinates, for algorithms that interpolate
    /// between pixels.
    #[must_use]
    pub fn to_raster(&self, point: Point) -> (f64, f64) {
        let x = self.offset_x + (point.x - self.viewport.x_min) * self.scale;
        let y = self.offset_y + (self.viewport.y_max - point.y) * self.scale;
        (x, y)
    }

    /// Nearest raster pixel.
    #[must_use]
    pub fn to_pixel(&self, point: Point) -> Pixel {
        let (x, y) = self.to_raster(point);
        Pixel {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_viewport() -> Viewport {
        Viewport {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }

    #[test]
    fn test_degenerate_viewport_is_rejected() {
        let rect = PixelRect::from_dimensions(10, 10).unwrap();
        let result = RasterProjection::new(Viewport::degenerate(), rect);

        assert!(matches!(
            result,
            Err(RasterProjectionError::DegenerateViewport { .. })
        ));
    }

    #[test]
    fn test_square_viewport_fills_square_rect() {
        let rect = PixelRect::from_dimensions(101, 101).unwrap();
        let projection = RasterProjection::new(unit_viewport(), rect).unwrap();

        // World y is flipped: the viewport's top edge is raster row 0.
        assert_eq!(projection.to_pixel(Point { x: 0.0, y: 1.0 }), Pixel { x: 0, y: 0 });
        assert_eq!(projection.to_pixel(Point { x: 0.0, y: 0.0 }), Pixel { x: 0, y: 100 });
        assert_eq!(projection.to_pixel(Point { x: 1.0, y: 1.0 }), Pixel { x: 100, y: 0 });
        assert_eq!(projection.to_pixel(Point { x: 0.5, y: 0.5 }), Pixel { x: 50, y: 50 });
    }

    #[test]
    fn test_wide_viewport_is_letterboxed() {
        let wide = Viewport {
            x_min: 0.0,
            x_max: 2.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        let rect = PixelRect::from_dimensions(101, 101).unwrap();
        let projection = RasterProjection::new(wide, rect).unwrap();

        // Scale is bounded by the x axis (50 px per world unit), and the
        // mapped strip is centred vertically.
        assert_eq!(projection.to_pixel(Point { x: 0.0, y: 1.0 }), Pixel { x: 0, y: 25 });
        assert_eq!(projection.to_pixel(Point { x: 2.0, y: 0.0 }), Pixel { x: 100, y: 75 });
    }

    #[test]
    fn test_offset_rect_shifts_the_projection() {
        let rect = PixelRect::new(Pixel { x: 10, y: 20 }, Pixel { x: 110, y: 120 }).unwrap();
        let projection = RasterProjection::new(unit_viewport(), rect).unwrap();

        assert_eq!(projection.to_pixel(Point { x: 0.0, y: 1.0 }), Pixel { x: 10, y: 20 });
        assert_eq!(projection.to_pixel(Point { x: 1.0, y: 0.0 }), Pixel { x: 110, y: 120 });
    }

    #[test]
    fn test_to_raster_is_continuous() {
        let rect = PixelRect::from_dimensions(101, 101).unwrap();
        let projection = RasterProjection::new(unit_viewport(), rect).unwrap();
        let (x, y) = projection.to_raster(Point { x: 0.255, y: 0.745 });

        assert!((x - 25.5).abs() < 1e-9);
        assert!((y - 25.5).abs() < 1e-9);
    }
}

use std::error::Error;
use std::fmt;

use crate::controllers::ports::renderer::RendererPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel::Pixel;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::polyline::Polyline;
use crate::core::data::viewport::Viewport;
use crate::core::util::raster_projection::{RasterProjection, RasterProjectionError};

/// How far the interior tint is pushed toward white.
const FILL_LIGHTEN: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    PixelBuffer(PixelBufferError),
    Projection(RasterProjectionError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Projection(err) => write!(f, "projection error: {}", err),
        }
    }
}

impl Error for RenderError {}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<RasterProjectionError> for RenderError {
    fn from(err: RasterProjectionError) -> Self {
        Self::Projection(err)
    }
}

/// CPU rasterizer for polylines: one-pixel Bresenham stroke over an optional
/// even-odd scanline fill, on a white background.
pub struct RasterRenderer {
    rect: PixelRect,
}

impl RasterRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Ok(Self {
            rect: PixelRect::from_dimensions(width, height)?,
        })
    }

    #[must_use]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }
}

impl RendererPort for RasterRenderer {
    type Failure = RenderError;

    fn render(
        &self,
        curve: &Polyline,
        viewport: &Viewport,
        colour: Colour,
        fill: bool,
    ) -> Result<PixelBuffer, RenderError> {
        let mut buffer = PixelBuffer::filled(self.rect, Colour::WHITE);

        if curve.is_empty() || viewport.is_degenerate() {
            tracing::debug!("empty curve or zero-size viewport, returning blank image");
            return Ok(buffer);
        }

        let projection = RasterProjection::new(*viewport, self.rect)?;

        if fill && curve.is_closed() {
            fill_interior(&mut buffer, curve, &projection, colour.lightened(FILL_LIGHTEN))?;
        }
        stroke(&mut buffer, curve, &projection, colour)?;

        Ok(buffer)
    }
}

fn stroke(
    buffer: &mut PixelBuffer,
    curve: &Polyline,
    projection: &RasterProjection,
    colour: Colour,
) -> Result<(), PixelBufferError> {
    let pixels: Vec<Pixel> = curve
        .points()
        .iter()
        .map(|point| projection.to_pixel(*point))
        .collect();

    if pixels.len() == 1 {
        if buffer.rect().contains(pixels[0]) {
            buffer.set_pixel(pixels[0], colour)?;
        }
        return Ok(());
    }

    for pair in pixels.windows(2) {
        draw_line(buffer, pair[0], pair[1], colour)?;
    }

    Ok(())
}

/// Bresenham line from `from` to `to`, clipped to the buffer's rect.
fn draw_line(
    buffer: &mut PixelBuffer,
    from: Pixel,
    to: Pixel,
    colour: Colour,
) -> Result<(), PixelBufferError> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = from.x;
    let mut y = from.y;

    loop {
        let pixel = Pixel { x, y };
        if buffer.rect().contains(pixel) {
            buffer.set_pixel(pixel, colour)?;
        }

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == to.x {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == to.y {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    Ok(())
}

/// Even-odd scanline fill of the closed curve's interior.
///
/// For every raster row, the crossings of the projected edges with that row
/// are collected and sorted; pixels between alternating pairs are inside.
fn fill_interior(
    buffer: &mut PixelBuffer,
    curve: &Polyline,
    projection: &RasterProjection,
    tint: Colour,
) -> Result<(), PixelBufferError> {
    let raster: Vec<(f64, f64)> = curve
        .points()
        .iter()
        .map(|point| projection.to_raster(*point))
        .collect();

    let rect = buffer.rect();
    let left = rect.top_left().x;
    let right = rect.bottom_right().x;

    for row in rect.top_left().y..=rect.bottom_right().y {
        let scan_y = f64::from(row);
        let mut crossings = Vec::new();

        for pair in raster.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if (y0 <= scan_y) != (y1 <= scan_y) {
                crossings.push(x0 + (scan_y - y0) * (x1 - x0) / (y1 - y0));
            }
        }

        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks(2) {
            let [start, end] = span else {
                continue;
            };
            let from = (start.ceil() as i32).max(left);
            let to = (end.floor() as i32).min(right);

            for x in from..=to {
                buffer.set_pixel(Pixel { x, y: row }, tint)?;
            }
        }
    }

    Ok(())
}

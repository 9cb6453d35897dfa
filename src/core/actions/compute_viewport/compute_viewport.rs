use crate::core::data::half_type::HalfType;
use crate::core::data::polyline::Polyline;
use crate::core::data::viewport::Viewport;

/// Chooses the world-space window that frames a polyline for rendering.
///
/// The complete snowflake gets a wide margin of `0.5 * scale` on every side;
/// a half keeps the wide margin along the uncut axis and a tight margin of
/// `0.1 * scale` along the cut axis, so the kept half fills the frame. An
/// empty polyline degenerates to a zero-size viewport, which renderers treat
/// as a no-render condition.
#[must_use]
pub fn compute_viewport(polyline: &Polyline, half: HalfType, scale: f64) -> Viewport {
    let extremes = (
        polyline.min_x(),
        polyline.max_x(),
        polyline.min_y(),
        polyline.max_y(),
    );
    let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = extremes else {
        return Viewport::degenerate();
    };

    let wide = 0.5 * scale;
    let tight = 0.1 * scale;

    match half {
        HalfType::Complete => Viewport {
            x_min: -wide,
            x_max: max_x + wide,
            y_min: -wide,
            y_max: max_y + wide,
        },
        HalfType::Top => Viewport {
            x_min: -wide,
            x_max: max_x + wide,
            y_min: min_y - tight,
            y_max: max_y + tight,
        },
        HalfType::Bottom => Viewport {
            x_min: -wide,
            x_max: max_x + wide,
            y_min: -tight,
            y_max: max_y + tight,
        },
        HalfType::Left => Viewport {
            x_min: -tight,
            x_max: max_x + tight,
            y_min: -wide,
            y_max: max_y + wide,
        },
        HalfType::Right => Viewport {
            x_min: min_x - tight,
            x_max: max_x + tight,
            y_min: -wide,
            y_max: max_y + wide,
        },
    }
}

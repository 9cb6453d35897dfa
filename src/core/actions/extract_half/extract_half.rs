use crate::core::data::half_type::HalfType;
use crate::core::data::polyline::Polyline;

/// Filters a completed polyline down to one geometric half.
///
/// The midlines sit at half the maximum coordinate of the input. Relative
/// order among kept points is preserved; the result is neither reconnected
/// nor closed, and it may legitimately come out empty.
#[must_use]
pub fn extract_half(polyline: &Polyline, half: HalfType) -> Polyline {
    if half == HalfType::Complete {
        return polyline.clone();
    }

    let mid_x = polyline.max_x().unwrap_or(0.0) / 2.0;
    let mid_y = polyline.max_y().unwrap_or(0.0) / 2.0;

    let kept = polyline
        .points()
        .iter()
        .copied()
        .filter(|point| half.keeps(*point, mid_x, mid_y))
        .collect();

    Polyline::from_points(kept)
}

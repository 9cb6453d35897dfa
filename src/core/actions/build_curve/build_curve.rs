use std::f64::consts::FRAC_PI_3;

use crate::core::data::point::Point;
use crate::core::data::polyline::Polyline;

// Clockwise rotation puts the bump on the exterior side of the
// counter-clockwise base triangle.
const PEAK_ANGLE: f64 = -FRAC_PI_3;

/// Builds the closed Koch snowflake polyline at the requested depth.
///
/// Depth 0 is an equilateral triangle of side `scale` with one vertex at the
/// origin, traversed p1 -> p2 -> p3 -> p1. Each further round replaces every
/// segment with four shorter ones, so depth n holds `3 * 4^n + 1` points.
/// Rounds are applied one at a time; each depth is the input to the next.
#[must_use]
pub fn build_curve(depth: u32, scale: f64) -> Polyline {
    let mut curve = base_triangle(scale);
    for _ in 0..depth {
        curve = subdivide(&curve);
    }
    curve
}

fn base_triangle(scale: f64) -> Polyline {
    let height = (3.0_f64.sqrt() / 2.0) * scale;
    let p1 = Point { x: 0.0, y: 0.0 };
    let p2 = Point { x: scale, y: 0.0 };
    let p3 = Point {
        x: scale / 2.0,
        y: height,
    };

    Polyline::from_points(vec![p1, p2, p3, p1])
}

/// One subdivision round.
///
/// Every segment (p0, p1) becomes p0 -> one-third point -> peak -> two-thirds
/// point; the seam point p1 is emitted as the p0 of the next segment, and the
/// final point of the round is re-appended to keep the curve closed. The peak
/// is the two-thirds point rotated -60 degrees about the one-third point.
fn subdivide(curve: &Polyline) -> Polyline {
    let points = curve.points();
    let mut next = Vec::with_capacity(points.len().saturating_sub(1) * 4 + 1);

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let segment = p1 - p0;
        let one_third = p0 + segment * (1.0 / 3.0);
        let two_thirds = p0 + segment * (2.0 / 3.0);
        let peak = one_third + (two_thirds - one_third).rotated(PEAK_ANGLE);

        next.push(p0);
        next.push(one_third);
        next.push(peak);
        next.push(two_thirds);
    }

    if let Some(last) = points.last() {
        next.push(*last);
    }

    Polyline::from_points(next)
}

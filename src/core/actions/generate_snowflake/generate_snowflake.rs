use crate::core::actions::build_curve::build_curve::build_curve;
use crate::core::actions::extract_half::extract_half::extract_half;
use crate::core::data::polyline::Polyline;
use crate::core::data::snowflake_params::SnowflakeParams;

/// Produces the polyline a caller asked for: the complete curve at the
/// requested depth and scale, filtered to the requested half.
///
/// Parameter validation happened when the [`SnowflakeParams`] value was
/// constructed, so generation itself cannot fail.
#[must_use]
pub fn generate_snowflake(params: &SnowflakeParams) -> Polyline {
    let complete = build_curve(params.depth(), params.scale());
    extract_half(&complete, params.half())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::half_type::HalfType;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_depth_one_complete_has_thirteen_points() {
        let params = SnowflakeParams::new(1, 1.0, HalfType::Complete).unwrap();
        let curve = generate_snowflake(&params);

        assert_eq!(curve.len(), 13);
        assert!(curve.is_closed());
    }

    #[test]
    fn test_depth_zero_is_the_scaled_base_triangle() {
        let params = SnowflakeParams::new(0, 2.0, HalfType::Complete).unwrap();
        let curve = generate_snowflake(&params);
        let points = curve.points();

        assert_eq!(points.len(), 4);
        assert!(close(points[1].x, 2.0) && close(points[1].y, 0.0));
        assert!(close(points[2].x, 1.0) && close(points[2].y, 3.0_f64.sqrt()));
    }

    #[test]
    fn test_left_half_is_a_filtered_subsequence_of_complete() {
        let complete_params = SnowflakeParams::new(3, 1.0, HalfType::Complete).unwrap();
        let left_params = SnowflakeParams::new(3, 1.0, HalfType::Left).unwrap();

        let complete = generate_snowflake(&complete_params);
        let left = generate_snowflake(&left_params);
        let mid_x = complete.max_x().unwrap() / 2.0;

        assert!(!left.is_empty());
        assert!(left.len() < complete.len());
        assert!(left.points().iter().all(|p| p.x <= mid_x));

        // Order-preserving subsequence of the complete traversal.
        let mut remaining = complete.points().iter();
        assert!(left.points().iter().all(|p| remaining.any(|q| q == p)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = SnowflakeParams::new(4, 2.5, HalfType::Bottom).unwrap();

        assert_eq!(generate_snowflake(&params), generate_snowflake(&params));
    }
}

use crate::core::data::metrics::SnowflakeMetrics;
use crate::core::data::polyline::Polyline;

/// Derives summary statistics for a curve generated at the given depth and
/// scale.
///
/// The estimated length treats every segment as `scale / 3^depth` long, the
/// side length the subdivision produces at that depth. Callers pass the
/// complete polyline here even when a half was extracted for rendering; the
/// length describes the whole construction, not the visible part.
#[must_use]
pub fn compute_metrics(polyline: &Polyline, depth: u32, scale: f64) -> SnowflakeMetrics {
    let total_points = polyline.len();
    let total_segments = total_points.saturating_sub(1);
    let segment_length = scale / 3.0_f64.powi(depth as i32);

    SnowflakeMetrics {
        total_points,
        total_segments,
        estimated_length: total_segments as f64 * segment_length,
        fractal_dimension: 4.0_f64.ln() / 3.0_f64.ln(),
    }
}

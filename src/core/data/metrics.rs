use serde::Serialize;

/// Read-only summary of one generated curve.
///
/// The fractal dimension is a structural constant of the Koch subdivision
/// (four self-similar copies at one-third scale), independent of depth and
/// scale; it is reported with every generation anyway.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SnowflakeMetrics {
    pub total_points: usize,
    pub total_segments: usize,
    pub estimated_length: f64,
    pub fractal_dimension: f64,
}

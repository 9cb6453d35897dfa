pub mod build_curve;
pub mod compute_metrics;
pub mod compute_viewport;
pub mod extract_half;
pub mod generate_snowflake;

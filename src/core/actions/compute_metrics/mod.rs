pub mod compute_metrics;

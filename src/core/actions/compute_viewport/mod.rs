pub mod compute_viewport;

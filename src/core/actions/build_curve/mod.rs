pub mod build_curve;

pub mod extract_half;

pub mod polyline_renderer;

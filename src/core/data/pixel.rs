/// Integer raster coordinate. Raster y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

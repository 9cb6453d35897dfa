use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes a pixel buffer into an image file on disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;

    /// File extension of the encoding, without the dot. The boundary layer
    /// uses it to name output files.
    fn extension(&self) -> &'static str;
}

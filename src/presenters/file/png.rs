use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageBuffer, Rgb};
use std::io;
use std::path::Path;

/// PNG encoder backed by the `image` crate.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let width = buffer.rect().width();
        let height = buffer.rect().height();

        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_raw(width, height, buffer.data().to_vec()).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "pixel buffer does not match its raster size",
                )
            })?;

        img.save(filepath.as_ref()).map_err(io::Error::other)
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

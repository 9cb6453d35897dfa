use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) encoder. No dependencies, handy for debugging raw pixels.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut out = BufWriter::new(file);

        // P6 header: binary RGB, then width, height and the max channel value
        write!(
            out,
            "P6\n{} {}\n255\n",
            buffer.rect().width(),
            buffer.rect().height()
        )?;
        out.write_all(buffer.data())?;
        out.flush()
    }

    fn extension(&self) -> &'static str {
        "ppm"
    }
}

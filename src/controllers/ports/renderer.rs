use std::error::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::polyline::Polyline;
use crate::core::data::viewport::Viewport;

/// Turns a polyline plus its framing into pixels.
///
/// Implementations must accept an empty polyline or a degenerate viewport
/// and produce a background-only buffer for them; emptiness is a legitimate
/// geometric outcome, not an error.
pub trait RendererPort {
    type Failure: Error;

    fn render(
        &self,
        curve: &Polyline,
        viewport: &Viewport,
        colour: Colour,
        fill: bool,
    ) -> Result<PixelBuffer, Self::Failure>;
}

use std::error::Error;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::image_store::{ImageStorePort, StoredImage};
use crate::controllers::ports::renderer::RendererPort;
use crate::core::actions::build_curve::build_curve::build_curve;
use crate::core::actions::compute_metrics::compute_metrics::compute_metrics;
use crate::core::actions::compute_viewport::compute_viewport::compute_viewport;
use crate::core::actions::extract_half::extract_half::extract_half;
use crate::core::data::colour::Colour;
use crate::core::data::half_type::HalfType;
use crate::core::data::metrics::SnowflakeMetrics;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::snowflake_params::SnowflakeParams;

/// One persisted render together with the metrics of its generation.
#[derive(Debug)]
pub struct GeneratedImage {
    pub path: PathBuf,
    pub half: HalfType,
    pub metrics: SnowflakeMetrics,
}

/// Wires the geometry core to its collaborators: a renderer, a file
/// presenter and an image store, all behind ports so tests can stub them.
pub struct SnowflakeController<R, P, S> {
    renderer: R,
    presenter: P,
    store: S,
}

impl<R, P, S> SnowflakeController<R, P, S>
where
    R: RendererPort,
    R::Failure: 'static,
    P: FilePresenterPort,
    S: ImageStorePort,
{
    pub fn new(renderer: R, presenter: P, store: S) -> Self {
        Self {
            renderer,
            presenter,
            store,
        }
    }

    /// Runs the full pipeline for one parameter set: build, filter, measure,
    /// frame, rasterize, persist.
    pub fn generate(
        &self,
        params: &SnowflakeParams,
        colour: Colour,
    ) -> Result<GeneratedImage, Box<dyn Error>> {
        let (buffer, metrics) = self.render_variant(params, colour)?;
        self.persist(params, &buffer, metrics)
    }

    /// Renders all five half variants of one depth and scale in parallel,
    /// then persists them in variant order.
    pub fn generate_all(
        &self,
        depth: u32,
        scale: f64,
        colour: Colour,
    ) -> Result<Vec<GeneratedImage>, Box<dyn Error>>
    where
        R: Sync,
        R::Failure: Send,
        P: Sync,
        S: Sync,
    {
        let variants = HalfType::ALL
            .iter()
            .map(|half| SnowflakeParams::new(depth, scale, *half))
            .collect::<Result<Vec<_>, _>>()?;

        let rendered = variants
            .par_iter()
            .map(|params| self.render_variant(params, colour))
            .collect::<Result<Vec<_>, _>>()?;

        variants
            .iter()
            .zip(rendered)
            .map(|(params, (buffer, metrics))| self.persist(params, &buffer, metrics))
            .collect()
    }

    pub fn list(&self) -> std::io::Result<Vec<StoredImage>> {
        self.store.list()
    }

    pub fn clear(&self) -> std::io::Result<usize> {
        self.store.clear()
    }

    fn render_variant(
        &self,
        params: &SnowflakeParams,
        colour: Colour,
    ) -> Result<(PixelBuffer, SnowflakeMetrics), R::Failure> {
        let complete = build_curve(params.depth(), params.scale());
        let curve = extract_half(&complete, params.half());

        // Metrics describe the whole construction at this depth, never the
        // filtered half.
        let metrics = compute_metrics(&complete, params.depth(), params.scale());
        let viewport = compute_viewport(&curve, params.half(), params.scale());

        if curve.is_empty() {
            tracing::warn!(half = %params.half(), "half extraction kept no points");
        }

        let buffer = self
            .renderer
            .render(&curve, &viewport, colour, params.half().fills())?;

        Ok((buffer, metrics))
    }

    fn persist(
        &self,
        params: &SnowflakeParams,
        buffer: &PixelBuffer,
        metrics: SnowflakeMetrics,
    ) -> Result<GeneratedImage, Box<dyn Error>> {
        let stem = format!(
            "koch_{}_{}iter_{}scale",
            params.half(),
            params.depth(),
            params.scale()
        );
        let path = self.store.next_path(&stem, self.presenter.extension())?;
        self.presenter.present(buffer, &path)?;

        tracing::info!(
            path = %path.display(),
            points = metrics.total_points,
            "snowflake rendered"
        );

        Ok(GeneratedImage {
            path,
            half: params.half(),
            metrics,
        })
    }
}

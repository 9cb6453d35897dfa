use std::error::Error;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use koch_studio::cli::{Cli, Commands, ImageFormat};
use koch_studio::controllers::ports::file_presenter::FilePresenterPort;
use koch_studio::controllers::ports::image_store::ImageStorePort;
use koch_studio::controllers::ports::renderer::RendererPort;
use koch_studio::controllers::snowflake::{GeneratedImage, SnowflakeController};
use koch_studio::core::data::colour::Colour;
use koch_studio::core::data::half_type::HalfType;
use koch_studio::core::data::metrics::SnowflakeMetrics;
use koch_studio::core::data::snowflake_params::SnowflakeParams;
use koch_studio::presenters::file::png::PngFilePresenter;
use koch_studio::presenters::file::ppm::PpmFilePresenter;
use koch_studio::render::polyline_renderer::RasterRenderer;
use koch_studio::storage::image_store::FsImageStore;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Generate {
            depth,
            scale,
            half,
            colour,
            width,
            height,
            format,
            out_dir,
            all_halves,
            json,
        } => {
            let renderer = RasterRenderer::new(width, height)?;
            let store = FsImageStore::new(out_dir);

            match format {
                ImageFormat::Png => run_generate(
                    SnowflakeController::new(renderer, PngFilePresenter::new(), store),
                    depth,
                    scale,
                    half,
                    colour,
                    all_halves,
                    json,
                ),
                ImageFormat::Ppm => run_generate(
                    SnowflakeController::new(renderer, PpmFilePresenter::new(), store),
                    depth,
                    scale,
                    half,
                    colour,
                    all_halves,
                    json,
                ),
            }
        }
        Commands::List { out_dir, json } => {
            let store = FsImageStore::new(out_dir);
            let images = store.list()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&images)?);
            } else if images.is_empty() {
                println!("no stored images");
            } else {
                for image in &images {
                    println!(
                        "{}  {:>10} bytes  {}",
                        image.created.format("%Y-%m-%d %H:%M:%S"),
                        image.size_bytes,
                        image.filename
                    );
                }
            }
            Ok(())
        }
        Commands::Clear { out_dir } => {
            let store = FsImageStore::new(out_dir);
            let removed = store.clear()?;
            println!("removed {} images", removed);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct MetricsReport {
    half_type: HalfType,
    path: String,
    #[serde(flatten)]
    metrics: SnowflakeMetrics,
}

fn run_generate<R, P, S>(
    controller: SnowflakeController<R, P, S>,
    depth: u32,
    scale: f64,
    half: HalfType,
    colour: Colour,
    all_halves: bool,
    json: bool,
) -> Result<(), Box<dyn Error>>
where
    R: RendererPort + Sync,
    R::Failure: Send + 'static,
    P: FilePresenterPort + Sync,
    S: ImageStorePort + Sync,
{
    let images = if all_halves {
        controller.generate_all(depth, scale, colour)?
    } else {
        let params = SnowflakeParams::new(depth, scale, half)?;
        vec![controller.generate(&params, colour)?]
    };

    for image in &images {
        report(image, json)?;
    }
    Ok(())
}

fn report(image: &GeneratedImage, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let report = MetricsReport {
            half_type: image.half,
            path: image.path.display().to_string(),
            metrics: image.metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} -> {}", image.half, image.path.display());
        println!(
            "  points: {}  segments: {}  length: {:.4}  dimension: {:.4}",
            image.metrics.total_points,
            image.metrics.total_segments,
            image.metrics.estimated_length,
            image.metrics.fractal_dimension
        );
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "koch_studio=debug,info"
    } else {
        "koch_studio=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

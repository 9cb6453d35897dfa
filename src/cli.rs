use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::data::colour::Colour;
use crate::core::data::half_type::HalfType;

#[derive(Parser)]
#[command(name = "koch_studio")]
#[command(about = "Koch snowflake generator: curves, metrics and raster renders", long_about = None)]
pub struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a snowflake image and report its metrics
    Generate {
        /// Subdivision rounds applied to the base triangle (0-8)
        #[arg(short, long, default_value_t = 4)]
        depth: u32,

        /// Side length of the base triangle (0 < scale <= 10)
        #[arg(short, long, default_value_t = 2.0)]
        scale: f64,

        /// Geometric half to keep: complete, top, bottom, left or right
        #[arg(short = 'H', long, default_value = "complete")]
        half: HalfType,

        /// Stroke colour: a named colour or #RRGGBB
        #[arg(short, long, default_value = "blue")]
        colour: Colour,

        /// Output image width in pixels
        #[arg(long, default_value_t = 1000)]
        width: u32,

        /// Output image height in pixels
        #[arg(long, default_value_t = 1000)]
        height: u32,

        /// Image encoding
        #[arg(short, long, value_enum, default_value = "png")]
        format: ImageFormat,

        /// Directory that receives rendered images
        #[arg(short, long, default_value = "output/images")]
        out_dir: PathBuf,

        /// Render every half variant of this depth and scale in one run
        #[arg(long)]
        all_halves: bool,

        /// Print metrics as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List stored images
    List {
        /// Directory that holds rendered images
        #[arg(short, long, default_value = "output/images")]
        out_dir: PathBuf,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete all stored images
    Clear {
        /// Directory that holds rendered images
        #[arg(short, long, default_value = "output/images")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Png,
    Ppm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["koch_studio", "generate"]).unwrap();

        match cli.command {
            Commands::Generate {
                depth,
                scale,
                half,
                colour,
                width,
                height,
                format,
                all_halves,
                json,
                ..
            } => {
                assert_eq!(depth, 4);
                assert_eq!(scale, 2.0);
                assert_eq!(half, HalfType::Complete);
                assert_eq!(colour, Colour { r: 0, g: 0, b: 255 });
                assert_eq!(width, 1000);
                assert_eq!(height, 1000);
                assert_eq!(format, ImageFormat::Png);
                assert!(!all_halves);
                assert!(!json);
            }
            _ => panic!("expected generate subcommand"),
        }
    }

    #[test]
    fn test_generate_accepts_half_and_colour() {
        let cli = Cli::try_parse_from([
            "koch_studio",
            "generate",
            "--depth",
            "2",
            "--half",
            "left",
            "--colour",
            "#102030",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { depth, half, colour, .. } => {
                assert_eq!(depth, 2);
                assert_eq!(half, HalfType::Left);
                assert_eq!(colour, Colour { r: 16, g: 32, b: 48 });
            }
            _ => panic!("expected generate subcommand"),
        }
    }

    #[test]
    fn test_unknown_half_is_rejected_before_the_core() {
        let result = Cli::try_parse_from(["koch_studio", "generate", "--half", "diagonal"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_colour_is_rejected_before_the_core() {
        let result = Cli::try_parse_from(["koch_studio", "generate", "--colour", "nope"]);

        assert!(result.is_err());
    }
}

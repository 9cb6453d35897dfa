pub mod cli;
pub mod controllers;
pub mod core;
pub mod presenters;
pub mod render;
pub mod storage;

pub use controllers::snowflake::SnowflakeController;
pub use crate::core::actions::generate_snowflake::generate_snowflake::generate_snowflake;
pub use crate::core::data::half_type::HalfType;
pub use crate::core::data::snowflake_params::SnowflakeParams;
pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
pub use render::polyline_renderer::RasterRenderer;
pub use storage::image_store::FsImageStore;

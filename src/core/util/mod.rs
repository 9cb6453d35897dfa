pub mod raster_projection;

//! Command-line front end: scene setup, panoramic mosaics and image output.

pub mod app;
pub mod mosaic;
pub mod output;
pub mod scene_time;

pub use app::{AppError, render_from_config};
pub use mosaic::{MosaicError, assemble, panoramic_longitudes, parse_grid};
pub use output::{OutputError, read_frame, write_frame, write_png};
pub use scene_time::parse_render_time;

//! Configuration for spacecam.
//!
//! Settings persist as a RON file in the user's config directory. Command-line
//! flags override the loaded values; missing sections and fields fall back to
//! defaults so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, OutputConfig, PngCompression, RenderConfig, TextureConfig,
    default_config_dir,
};
pub use error::ConfigError;

//! Texture loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading a texture image.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read texture {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode texture {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("texture {path} has no pixels")]
    Empty { path: PathBuf },
}

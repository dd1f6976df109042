//! Render error types.

use thiserror::Error;

/// Errors that abort a render. No partial frame is ever returned.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("texture `{id}` is unavailable: {source}")]
    TextureUnavailable {
        id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("supersampling factor must be at least 1")]
    NoSamples,

    #[error("frame size must be non-zero, got {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },

    #[error("failed to spawn render worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("a render worker panicked")]
    WorkerPanicked,
}

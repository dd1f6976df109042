//! File-backed texture provider with a per-id cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use spacecam_render::{Texture, TextureProvider};
use tracing::info;

use crate::{ImageTexture, TextureError};

/// Loads textures from image files, treating texture ids as paths.
///
/// Relative ids resolve under an optional root directory. Each id is decoded
/// once and shared afterwards.
#[derive(Default)]
pub struct FileTextureProvider {
    root: Option<PathBuf>,
    cache: DashMap<String, Arc<dyn Texture>>,
}

impl FileTextureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            cache: DashMap::new(),
        }
    }

    /// File path for a texture id.
    pub fn resolve(&self, id: &str) -> PathBuf {
        let path = Path::new(id);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Number of textures currently cached.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl TextureProvider for FileTextureProvider {
    type Error = TextureError;

    fn load(&self, id: &str) -> Result<Arc<dyn Texture>, TextureError> {
        if let Some(texture) = self.cache.get(id) {
            return Ok(Arc::clone(texture.value()));
        }
        let path = self.resolve(id);
        let texture = ImageTexture::open(&path)?;
        let (width, height) = texture.dimensions();
        info!("Texture '{id}' loaded from {} ({width}x{height})", path.display());

        let texture: Arc<dyn Texture> = Arc::new(texture);
        self.cache.insert(id.to_string(), Arc::clone(&texture));
        Ok(texture)
    }
}

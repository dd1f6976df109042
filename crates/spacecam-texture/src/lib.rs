//! Equirectangular image textures loaded from disk.

mod error;
mod image_texture;
mod provider;

pub use error::TextureError;
pub use image_texture::ImageTexture;
pub use provider::FileTextureProvider;

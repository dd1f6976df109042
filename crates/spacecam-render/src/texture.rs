//! Surface texture capability consumed by the renderer.

use std::sync::Arc;

use spacecam_math::{Color, Vector3};

use crate::{RenderError, Theme};

/// A color field over the unit sphere.
pub trait Texture: Send + Sync {
    /// Color at the unit-sphere point `point`.
    fn sample(&self, point: Vector3) -> Color;
}

impl<F> Texture for F
where
    F: Fn(Vector3) -> Color + Send + Sync,
{
    fn sample(&self, point: Vector3) -> Color {
        self(point)
    }
}

/// The same color everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantTexture(pub Color);

impl Texture for ConstantTexture {
    fn sample(&self, _point: Vector3) -> Color {
        self.0
    }
}

/// Resolves texture identifiers to loaded textures.
pub trait TextureProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self, id: &str) -> Result<Arc<dyn Texture>, Self::Error>;
}

/// Colors of the three surface layers at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSamples {
    pub day: Color,
    pub night: Color,
    pub clouds: Color,
}

/// The day, night and cloud textures of one render.
#[derive(Clone)]
pub struct SurfaceTextures {
    pub day: Arc<dyn Texture>,
    pub night: Arc<dyn Texture>,
    pub clouds: Arc<dyn Texture>,
}

impl SurfaceTextures {
    /// Acquire the theme's three textures. Fails on the first one that cannot load.
    pub fn load<P: TextureProvider>(theme: &Theme, provider: &P) -> Result<Self, RenderError> {
        let load = |id: &str| {
            provider
                .load(id)
                .map_err(|err| RenderError::TextureUnavailable {
                    id: id.to_string(),
                    source: Box::new(err),
                })
        };
        Ok(Self {
            day: load(&theme.day_texture)?,
            night: load(&theme.night_texture)?,
            clouds: load(&theme.cloud_texture)?,
        })
    }

    pub fn sample(&self, point: Vector3) -> SurfaceSamples {
        SurfaceSamples {
            day: self.day.sample(point),
            night: self.night.sample(point),
            clouds: self.clouds.sample(point),
        }
    }
}

impl std::fmt::Debug for SurfaceTextures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceTextures").finish_non_exhaustive()
    }
}

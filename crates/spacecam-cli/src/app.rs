//! Turning a loaded [`Config`] into a rendered frame.

use chrono::{DateTime, Utc};
use spacecam_config::{Config, ConfigError, PngCompression};
use spacecam_ephemeris::{subsolar_point, sun_direction_ecef};
use spacecam_math::Vector3;
use spacecam_render::{Camera, Frame, RenderError, SurfaceTextures, render_with_textures};
use spacecam_texture::FileTextureProvider;
use thiserror::Error;
use tracing::info;

use crate::mosaic::{MosaicError, assemble, panoramic_longitudes};
use crate::output::OutputError;

/// Any failure of a command-line run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid --time: {0}")]
    Time(#[from] chrono::ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Mosaic(#[from] MosaicError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// PNG encoder setting for a configured compression level.
pub fn png_compression(compression: PngCompression) -> png::Compression {
    match compression {
        PngCompression::Fast => png::Compression::Fast,
        PngCompression::Balanced => png::Compression::Default,
        PngCompression::Best => png::Compression::Best,
    }
}

/// Render the view (or 2x2 panorama) described by `config` at `time`.
pub fn render_from_config(config: &Config, time: DateTime<Utc>) -> Result<Frame, AppError> {
    config.validate()?;

    let sun = sun_direction_ecef(time);
    let (sun_lat, sun_lon) = subsolar_point(time);
    info!("Sun overhead at {sun_lat:.2}°, {sun_lon:.2}° at {time}");

    let provider = match &config.textures.root {
        Some(root) => FileTextureProvider::with_root(root),
        None => FileTextureProvider::new(),
    };
    let textures = SurfaceTextures::load(&config.theme, &provider)?;

    if config.render.panoramic {
        let tile_size = config.render.size / 2;
        let tiles = panoramic_longitudes(config.camera.lon_deg)
            .into_iter()
            .map(|lon| render_view(config, lon, tile_size, sun, &textures))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(assemble(&tiles, 2, 2)?)
    } else {
        render_view(config, config.camera.lon_deg, config.render.size, sun, &textures)
    }
}

fn render_view(
    config: &Config,
    lon_deg: f64,
    size: u32,
    sun: Vector3,
    textures: &SurfaceTextures,
) -> Result<Frame, AppError> {
    let cam = &config.camera;
    let camera = Camera::new(
        cam.lat_deg,
        lon_deg,
        cam.altitude_km,
        cam.fov_deg,
        cam.tilt_deg,
        cam.yaw_deg,
        &config.scene,
    );
    let frame = render_with_textures(
        &camera,
        sun,
        &config.render.options(size),
        &config.theme,
        &config.shading,
        textures,
    )?;
    Ok(frame)
}

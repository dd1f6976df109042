//! Equirectangular planet maps decoded with the `image` crate.

use std::f64::consts::{PI, TAU};
use std::path::Path;

use image::{ImageReader, RgbaImage};
use spacecam_math::{Color, Vector3};
use spacecam_render::Texture;
use tracing::debug;

use crate::TextureError;

/// An equirectangular (longitude/latitude) map of the planet surface.
///
/// Column `W/2` is longitude 0 and longitude grows eastward; row 0 is the
/// north pole. Sampling is nearest neighbour with clamped edges.
pub struct ImageTexture {
    image: RgbaImage,
}

impl ImageTexture {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode the image at `path`. The format is detected from the file
    /// contents, falling back to the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let io_err = |source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        };
        let image = ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?
            .decode()
            .map_err(|source| TextureError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        if image.width() == 0 || image.height() == 0 {
            return Err(TextureError::Empty {
                path: path.to_path_buf(),
            });
        }
        debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel holding the surface point in direction `point`.
    pub fn pixel_coords(&self, point: Vector3) -> (u32, u32) {
        let (width, height) = self.image.dimensions();
        let w = f64::from(width);
        let h = f64::from(height);

        let lat = point.z.atan2((point.x * point.x + point.y * point.y).sqrt());
        let mut lon = point.y.atan2(point.x);
        if lon < 0.0 {
            lon += TAU;
        }

        let u = (w / 2.0 + lon / TAU * (w - 1.0)).rem_euclid(w);
        let v = (0.5 - lat / PI) * (h - 1.0);

        let x = (u as i64).clamp(0, i64::from(width) - 1);
        let y = (v as i64).clamp(0, i64::from(height) - 1);
        (x as u32, y as u32)
    }
}

impl Texture for ImageTexture {
    fn sample(&self, point: Vector3) -> Color {
        if self.image.width() == 0 || self.image.height() == 0 {
            return Color::TRANSPARENT;
        }
        let (x, y) = self.pixel_coords(point);
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Color::from_rgba8(r, g, b, a)
    }
}

//! RGBA8 output image.

/// A rendered RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create an all-zero frame with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Bytes in one row of pixels.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    /// RGBA value of a pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Mean of the RGB channels over the whole frame, in `[0, 255]`.
    pub fn mean_luminance(&self) -> f64 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let total: u64 = self
            .pixels
            .chunks_exact(4)
            .map(|px| u64::from(px[0]) + u64::from(px[1]) + u64::from(px[2]))
            .sum();
        total as f64 / (self.pixels.len() / 4 * 3) as f64
    }

    /// Copy `tile` into this frame with its top-left corner at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the tile does not fit.
    pub fn blit(&mut self, tile: &Frame, x: u32, y: u32) {
        let row_bytes = self.row_bytes();
        let tile_row = tile.row_bytes();
        for (ty, src) in tile.pixels.chunks_exact(tile_row).enumerate() {
            let start = (y as usize + ty) * row_bytes + x as usize * 4;
            self.pixels[start..start + tile_row].copy_from_slice(src);
        }
    }
}

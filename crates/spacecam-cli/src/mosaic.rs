//! Tiling several frames into one image.

use spacecam_render::Frame;
use thiserror::Error;

/// Errors while assembling a mosaic.
#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("invalid grid `{0}`, expected <cols>x<rows>")]
    InvalidGrid(String),

    #[error("expected {expected} tiles, got {got}")]
    TileCount { expected: usize, got: usize },

    #[error("tile {index} is {got_width}x{got_height}, expected {width}x{height}")]
    TileSize {
        index: usize,
        width: u32,
        height: u32,
        got_width: u32,
        got_height: u32,
    },
}

/// Parse a grid layout such as `2x2` or `4x1`.
pub fn parse_grid(text: &str) -> Result<(u32, u32), MosaicError> {
    let invalid = || MosaicError::InvalidGrid(text.to_string());
    let (cols, rows) = text.split_once(['x', 'X']).ok_or_else(invalid)?;
    let cols: u32 = cols.trim().parse().map_err(|_| invalid())?;
    let rows: u32 = rows.trim().parse().map_err(|_| invalid())?;
    if cols == 0 || rows == 0 {
        return Err(invalid());
    }
    Ok((cols, rows))
}

/// Camera longitudes of the four panoramic tiles, in row-major tile order.
pub fn panoramic_longitudes(lon_deg: f64) -> [f64; 4] {
    [lon_deg, lon_deg + 90.0, lon_deg + 180.0, lon_deg + 270.0]
}

/// Place equally sized `tiles` row by row into a `cols`×`rows` grid.
pub fn assemble(tiles: &[Frame], cols: u32, rows: u32) -> Result<Frame, MosaicError> {
    let expected = cols as usize * rows as usize;
    if tiles.len() != expected || expected == 0 {
        return Err(MosaicError::TileCount {
            expected,
            got: tiles.len(),
        });
    }

    let (width, height) = tiles[0].dimensions();
    if let Some((index, tile)) = tiles
        .iter()
        .enumerate()
        .find(|(_, tile)| tile.dimensions() != (width, height))
    {
        return Err(MosaicError::TileSize {
            index,
            width,
            height,
            got_width: tile.width,
            got_height: tile.height,
        });
    }

    let mut canvas = Frame::new(cols * width, rows * height);
    for (index, tile) in tiles.iter().enumerate() {
        let col = index as u32 % cols;
        let row = index as u32 / cols;
        canvas.blit(tile, col * width, row * height);
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> Frame {
        let mut frame = Frame::new(width, height);
        frame.pixels.fill(value);
        frame
    }

    #[test]
    fn test_parse_grid() {
        assert_eq!(parse_grid("2x2").unwrap(), (2, 2));
        assert_eq!(parse_grid("4X1").unwrap(), (4, 1));
        assert!(parse_grid("2by2").is_err());
        assert!(parse_grid("0x3").is_err());
        assert!(parse_grid("x2").is_err());
    }

    #[test]
    fn test_panoramic_longitudes() {
        assert_eq!(panoramic_longitudes(-60.0), [-60.0, 30.0, 120.0, 210.0]);
    }

    #[test]
    fn test_assemble_places_tiles_row_major() {
        let tiles: Vec<Frame> = (1..=4).map(|v| solid(2, 3, v * 10)).collect();
        let mosaic = assemble(&tiles, 2, 2).unwrap();
        assert_eq!(mosaic.dimensions(), (4, 6));
        assert_eq!(mosaic.pixel(0, 0), [10; 4]);
        assert_eq!(mosaic.pixel(3, 0), [20; 4]);
        assert_eq!(mosaic.pixel(1, 5), [30; 4]);
        assert_eq!(mosaic.pixel(2, 3), [40; 4]);
    }

    #[test]
    fn test_assemble_single_row() {
        let tiles: Vec<Frame> = (1..=3).map(|v| solid(1, 1, v)).collect();
        let strip = assemble(&tiles, 3, 1).unwrap();
        assert_eq!(strip.dimensions(), (3, 1));
        assert_eq!(strip.pixel(2, 0), [3; 4]);
    }

    #[test]
    fn test_wrong_tile_count() {
        let tiles = vec![solid(2, 2, 1); 3];
        assert!(matches!(
            assemble(&tiles, 2, 2),
            Err(MosaicError::TileCount { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn test_mismatched_tile_size() {
        let tiles = vec![solid(2, 2, 1), solid(2, 2, 1), solid(3, 2, 1), solid(2, 2, 1)];
        assert!(matches!(
            assemble(&tiles, 2, 2),
            Err(MosaicError::TileSize { index: 2, .. })
        ));
    }
}

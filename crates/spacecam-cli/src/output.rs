//! Reading and writing frames as image files.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use spacecam_render::Frame;
use thiserror::Error;
use tracing::info;

const JPEG_QUALITY: u8 = 95;

/// Errors while reading or writing image files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("unsupported output format `{0}`, use .png, .jpg or .jpeg")]
    UnsupportedFormat(String),

    #[error("frame buffer does not match its {width}x{height} size")]
    BufferSize { width: u32, height: u32 },
}

/// Encode `frame` as an 8-bit RGBA PNG.
pub fn write_png(
    path: &Path,
    frame: &Frame,
    compression: png::Compression,
) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), frame.width, frame.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(compression);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.pixels)?;
    writer.finish()?;
    info!("Wrote {}x{} PNG to {}", frame.width, frame.height, path.display());
    Ok(())
}

/// Write `frame` in the format named by the file extension (PNG or JPEG).
pub fn write_frame(
    path: &Path,
    frame: &Frame,
    compression: png::Compression,
) -> Result<(), OutputError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => write_png(path, frame, compression),
        "jpg" | "jpeg" => write_jpeg(path, frame),
        _ => Err(OutputError::UnsupportedFormat(ext)),
    }
}

fn write_jpeg(path: &Path, frame: &Frame) -> Result<(), OutputError> {
    let image = RgbaImage::from_raw(frame.width, frame.height, frame.pixels.clone()).ok_or(
        OutputError::BufferSize {
            width: frame.width,
            height: frame.height,
        },
    )?;
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgba8(image).to_rgb8();
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY).encode_image(&rgb)?;
    info!("Wrote {}x{} JPEG to {}", frame.width, frame.height, path.display());
    Ok(())
}

/// Decode any supported image file into an RGBA frame.
pub fn read_frame(path: &Path) -> Result<Frame, OutputError> {
    let image = image::ImageReader::open(path)
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()?
        .to_rgba8();
    Ok(Frame {
        width: image.width(),
        height: image.height(),
        pixels: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Frame {
        let mut frame = Frame::new(4, 2);
        for (i, px) in frame.pixels.chunks_exact_mut(4).enumerate() {
            let v = if i % 2 == 0 { 255 } else { 0 };
            px.copy_from_slice(&[v, 0, 255 - v, 255]);
        }
        frame
    }

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let frame = checker();
        write_png(&path, &frame, png::Compression::Fast).unwrap();
        assert_eq!(read_frame(&path).unwrap(), frame);
    }

    #[test]
    fn test_write_frame_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let frame = checker();

        let jpeg = dir.path().join("frame.JPG");
        write_frame(&jpeg, &frame, png::Compression::Fast).unwrap();
        assert_eq!(read_frame(&jpeg).unwrap().dimensions(), (4, 2));

        let bmp = dir.path().join("frame.bmp");
        assert!(matches!(
            write_frame(&bmp, &frame, png::Compression::Fast),
            Err(OutputError::UnsupportedFormat(ext)) if ext == "bmp"
        ));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/frame.png");
        assert!(matches!(
            write_png(&path, &checker(), png::Compression::Fast),
            Err(OutputError::Io { .. })
        ));
    }
}

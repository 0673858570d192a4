//! Panorama decoding.

use std::path::Path;

use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// Errors that can occur while reading a panorama.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode '{path}': {source}")]
    Image {
        path: String,
        source: image::ImageError,
    },
}

/// Decode an image file into a pixel buffer.
///
/// The pixel format is normalized to RGBA; PNG and JPEG sources are
/// supported. A file that decodes to a zero-size image is reported by the
/// assembler, not here.
pub fn decode_panorama(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let img = image::load_from_memory(&bytes).map_err(|source| DecodeError::Image {
        path: path.display().to_string(),
        source,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut buffer = PixelBuffer::new(width, height, Color::black());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        buffer.set(x, y, Color::from_rgba8(pixel.0));
    }

    Ok(buffer)
}

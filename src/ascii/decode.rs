//! Decoding raw image bytes into an RGB pixel grid.

use super::grid::{PixelGrid, RGB_CHANNELS};

/// Reasons a byte buffer could not be turned into a pixel grid.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("image data is empty")]
    Empty,

    #[error("unrecognized or corrupt image: {0}")]
    Unrecognized(#[from] image::ImageError),

    #[error("decoded image has unusable dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Decode an encoded raster image (PNG, JPEG, GIF, BMP, WebP, TIFF, PNM, ICO).
///
/// The format is guessed from the leading magic bytes. The result always has
/// three channels in the order channel 0 = red, 1 = green, 2 = blue; alpha is
/// dropped and grayscale sources are expanded.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid<u8>, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    PixelGrid::from_vec(
        width as usize,
        height as usize,
        RGB_CHANNELS,
        rgb.into_raw(),
    )
    .ok_or(DecodeError::InvalidDimensions { width, height })
}

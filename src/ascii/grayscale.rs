//! Color to single-channel reductions.
//!
//! Two different formulas live here on purpose. The tonal path uses
//! Rec. 709 relative luminance, while the edge detector reduces color with
//! the ITU-R BT.601 weights. Merging them would change the rendered output.

use super::grid::PixelGrid;

/// Rec. 709 relative-luminance weights for (R, G, B), scaled by 10000.
///
/// 2126 + 7152 + 722 = 10000, so white maps to exactly 255.0.
pub const LUMINANCE_WEIGHTS: [u32; 3] = [2126, 7152, 722];

/// Convert an RGB grid to relative luminance in the 0.0-255.0 range.
///
/// Y = 0.2126*R + 0.7152*G + 0.0722*B
///
/// Expects channel 0 = red, 1 = green, 2 = blue, as produced by
/// [`decode`](super::decode). A single-channel grid passes through with its
/// values unchanged.
pub fn to_luminance(grid: &PixelGrid<u8>) -> PixelGrid<f32> {
    if grid.channels() == 1 {
        return grid.map(f32::from);
    }

    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    let data = grid
        .data()
        .chunks_exact(grid.channels())
        .map(|px| {
            let weighted = wr * px[0] as u32 + wg * px[1] as u32 + wb * px[2] as u32;
            weighted as f32 / 10_000.0
        })
        .collect();

    PixelGrid::from_vec(grid.width(), grid.height(), 1, data)
        .unwrap_or_else(|| PixelGrid::filled(grid.width(), grid.height(), 1, 0.0))
}

/// Convert an RGB grid to 8-bit grayscale with the ITU-R BT.601 formula
/// used ahead of edge detection.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math with coefficients scaled by 1000, rounded to nearest.
/// A single-channel grid passes through unchanged.
pub fn to_gray_bt601(grid: &PixelGrid<u8>) -> PixelGrid<u8> {
    if grid.channels() == 1 {
        return grid.clone();
    }

    let data = grid
        .data()
        .chunks_exact(grid.channels())
        .map(|px| {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
        })
        .collect();

    PixelGrid::from_vec(grid.width(), grid.height(), 1, data)
        .unwrap_or_else(|| PixelGrid::filled(grid.width(), grid.height(), 1, 0))
}

//! Resampling grids to the character resolution.
//!
//! Resizing is separable: rows are resampled horizontally, then columns
//! vertically. Along an axis that shrinks, each output cell is the
//! area-weighted average of the source cells it covers; along an axis that
//! grows (or stays the same), samples are linearly interpolated between
//! pixel centres. Both are smooth, unlike nearest-neighbour picking.
//!
//! Sums are accumulated in `f64` so a constant region resamples to exactly
//! the same constant.
//!
//! Every channel is treated as a plain scalar. Direction grids are averaged
//! like any other value, so angles near the +/-PI wrap blend across it.

use super::dimensions::output_height;
use super::grid::PixelGrid;

/// One output sample along an axis: source indices and their weights.
type Taps = Vec<(usize, f64)>;

/// Resize `grid` to `target_width` columns, deriving the row count from the
/// source aspect ratio via [`output_height`].
pub fn resize_to_width(grid: &PixelGrid<f32>, target_width: usize) -> PixelGrid<f32> {
    let target_height = output_height(grid.width(), grid.height(), target_width);
    resize(grid, target_width, target_height)
}

/// Resize `grid` to exactly `width x height` cells.
pub fn resize(grid: &PixelGrid<f32>, width: usize, height: usize) -> PixelGrid<f32> {
    let channels = grid.channels();
    if grid.is_empty() || width == 0 || height == 0 {
        return PixelGrid::filled(width, height, channels, 0.0);
    }

    let x_taps = axis_taps(grid.width(), width);
    let y_taps = axis_taps(grid.height(), height);

    // Horizontal pass: src_height rows of `width` cells.
    let mut horizontal = Vec::with_capacity(grid.height() * width * channels);
    for sy in 0..grid.height() {
        let row = grid.row(sy);
        for taps in &x_taps {
            for c in 0..channels {
                horizontal.push(
                    taps.iter()
                        .map(|&(sx, w)| row[sx * channels + c] as f64 * w)
                        .sum::<f64>(),
                );
            }
        }
    }

    // Vertical pass.
    let stride = width * channels;
    let mut data = Vec::with_capacity(height * stride);
    for taps in &y_taps {
        for i in 0..stride {
            let value: f64 = taps
                .iter()
                .map(|&(sy, w)| horizontal[sy * stride + i] * w)
                .sum();
            data.push(value as f32);
        }
    }

    PixelGrid::from_vec(width, height, channels, data)
        .unwrap_or_else(|| PixelGrid::filled(width, height, channels, 0.0))
}

/// Precompute interpolation taps for mapping `src_len` samples onto `dst_len`.
fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Taps> {
    let scale = src_len as f64 / dst_len as f64;

    if dst_len < src_len {
        // Area averaging: output cell i covers [i*scale, (i+1)*scale).
        (0..dst_len)
            .map(|i| {
                let start = i as f64 * scale;
                let end = ((i + 1) as f64 * scale).min(src_len as f64);
                let first = start.floor() as usize;
                let last = (end.ceil() as usize).min(src_len);
                (first..last)
                    .filter_map(|j| {
                        let overlap = end.min((j + 1) as f64) - start.max(j as f64);
                        (overlap > 0.0).then(|| (j, overlap / scale))
                    })
                    .collect()
            })
            .collect()
    } else {
        // Linear interpolation between pixel centres.
        let max = (src_len - 1) as f64;
        (0..dst_len)
            .map(|i| {
                let pos = ((i as f64 + 0.5) * scale - 0.5).clamp(0.0, max);
                let j0 = pos.floor() as usize;
                let j1 = (j0 + 1).min(src_len - 1);
                let frac = pos - j0 as f64;
                if frac == 0.0 || j0 == j1 {
                    vec![(j0, 1.0)]
                } else {
                    vec![(j0, 1.0 - frac), (j1, frac)]
                }
            })
            .collect()
    }
}

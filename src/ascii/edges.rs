//! Sobel edge detection.

use std::f32::consts::PI;

use super::grayscale::to_gray_bt601;
use super::grid::{GradientField, PixelGrid};

/// Horizontal-gradient kernel (responds to vertical edges).
pub const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical-gradient kernel (responds to horizontal edges).
pub const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Reduce a decoded grid to BT.601 grayscale and run [`sobel`] on it.
pub fn detect_edges(grid: &PixelGrid<u8>) -> GradientField {
    let gray = to_gray_bt601(grid).map(f32::from);
    sobel(&gray)
}

/// Apply the 3x3 Sobel operator to a single-channel grid.
///
/// The kernels used are:
/// ```text
/// Gx:          Gy:
/// [-1  0  1]   [-1 -2 -1]
/// [-2  0  2]   [ 0  0  0]
/// [-1  0  1]   [ 1  2  1]
/// ```
///
/// Border pixels see a replicated neighbourhood, so every pixel gets a
/// gradient and the field has the same dimensions as the input. Only the
/// first channel is read.
pub fn sobel(gray: &PixelGrid<f32>) -> GradientField {
    let (width, height) = (gray.width(), gray.height());
    if gray.is_empty() {
        return GradientField {
            magnitude: PixelGrid::filled(width, height, 1, 0.0),
            direction: PixelGrid::filled(width, height, 1, 0.0),
        };
    }

    let mut magnitude = Vec::with_capacity(width * height);
    let mut direction = Vec::with_capacity(width * height);

    for y in 0..height as isize {
        for x in 0..width as isize {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;

            for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
                for kx in 0..3 {
                    let val = gray.get_clamped(x + kx as isize - 1, y + ky as isize - 1, 0);
                    gx += val * row_x[kx];
                    gy += val * row_y[kx];
                }
            }

            magnitude.push((gx * gx + gy * gy).sqrt());
            direction.push(gradient_angle(gx, gy));
        }
    }

    GradientField {
        magnitude: PixelGrid::from_vec(width, height, 1, magnitude)
            .unwrap_or_else(|| PixelGrid::filled(width, height, 1, 0.0)),
        direction: PixelGrid::from_vec(width, height, 1, direction)
            .unwrap_or_else(|| PixelGrid::filled(width, height, 1, 0.0)),
    }
}

/// `atan2(gy, gx)` folded into `(-PI, PI]`.
#[inline]
fn gradient_angle(gx: f32, gy: f32) -> f32 {
    let angle = gy.atan2(gx);
    if angle <= -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}

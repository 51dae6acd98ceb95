//! Cell to glyph mapping and text assembly.

use std::fmt;

use super::charset::{GlyphRamp, EDGE_GLYPH_FALLING, EDGE_GLYPH_RISING};
use super::grid::{GradientField, PixelGrid};

/// Full-scale sample value; luminance and magnitude are divided by this.
pub const SAMPLE_MAX: f32 = 255.0;

/// Default normalized edge magnitude above which a cell gets an edge glyph.
pub const EDGE_THRESHOLD: f32 = 0.3;

/// Rendered text: one `String` per output row, all of the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
    width: usize,
}

impl AsciiArt {
    /// Split row-major glyphs into rows of `width` characters.
    pub fn from_cells(cells: &[char], width: usize, height: usize) -> Self {
        let rows = if width == 0 {
            vec![String::new(); height]
        } else {
            cells
                .chunks(width)
                .take(height)
                .map(|row| row.iter().collect())
                .collect()
        };
        Self { rows, width }
    }

    /// The rendered rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Characters per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Rows joined with `\n`, no trailing newline.
impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Edge glyph for a gradient direction in radians.
#[inline]
pub fn edge_glyph(direction: f32) -> char {
    edge_glyph_degrees(direction.to_degrees())
}

/// Edge glyph for a gradient direction in degrees (any range).
///
/// After folding into `[0, 360)`:
/// - `[45, 135)` -> `/`
/// - `[135, 225)` and `[225, 315)` -> `\`
/// - everything else -> `/`
pub fn edge_glyph_degrees(degrees: f32) -> char {
    let degrees = degrees.rem_euclid(360.0);
    if (45.0..135.0).contains(&degrees) {
        EDGE_GLYPH_RISING
    } else if (135.0..225.0).contains(&degrees) || (225.0..315.0).contains(&degrees) {
        EDGE_GLYPH_FALLING
    } else {
        EDGE_GLYPH_RISING
    }
}

/// Tonal glyph for a raw 0-255 luminance sample.
#[inline]
pub fn tonal_glyph(luminance: f32, ramp: &GlyphRamp) -> char {
    ramp.glyph(luminance / SAMPLE_MAX)
}

/// Map a luminance grid to text using only the density ramp.
pub fn map_tonal(luminance: &PixelGrid<f32>, ramp: &GlyphRamp) -> AsciiArt {
    let cells: Vec<char> = luminance
        .data()
        .iter()
        .map(|&l| tonal_glyph(l, ramp))
        .collect();
    AsciiArt::from_cells(&cells, luminance.width(), luminance.height())
}

/// Map luminance plus gradient to text.
///
/// A cell whose normalized edge magnitude exceeds `threshold` gets an edge
/// glyph chosen by its direction; every other cell gets a tonal glyph. All
/// three grids must share dimensions, otherwise the gradient is ignored.
pub fn map_structure(
    luminance: &PixelGrid<f32>,
    gradient: &GradientField,
    threshold: f32,
    ramp: &GlyphRamp,
) -> AsciiArt {
    let (width, height) = (luminance.width(), luminance.height());
    let same_shape = |g: &PixelGrid<f32>| g.width() == width && g.height() == height;
    if !same_shape(&gradient.magnitude) || !same_shape(&gradient.direction) {
        log::warn!(
            "gradient field {}x{} does not match luminance {}x{}, rendering tones only",
            gradient.magnitude.width(),
            gradient.magnitude.height(),
            width,
            height
        );
        return map_tonal(luminance, ramp);
    }

    let cells: Vec<char> = luminance
        .data()
        .iter()
        .zip(gradient.magnitude.data())
        .zip(gradient.direction.data())
        .map(|((&l, &m), &d)| {
            if m / SAMPLE_MAX > threshold {
                edge_glyph(d)
            } else {
                tonal_glyph(l, ramp)
            }
        })
        .collect();
    AsciiArt::from_cells(&cells, width, height)
}

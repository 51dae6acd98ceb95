//! Image to ASCII art conversion.
//!
//! The pipeline runs these stages in order:
//!
//! 1. **Decode** - encoded bytes to an RGB grid ([`decode`])
//! 2. **Luminance** - Rec. 709 relative luminance ([`to_luminance`])
//! 3. **Edge detection** - BT.601 grayscale plus Sobel ([`detect_edges`])
//! 4. **Resampling** - luminance, magnitude and direction resized to the
//!    same character grid ([`resize`])
//! 5. **Glyph mapping** - edge glyph or density glyph per cell
//!    ([`map_structure`], [`map_tonal`])
//!
//! Decoding is the only stage that can fail. [`convert`] and
//! [`convert_with`] turn that failure into [`INVALID_IMAGE`] so callers
//! always get a string back.
//!
//! # Preconditions
//!
//! The output width must be positive. A width of 0 produces empty rows.

mod charset;
mod decode;
mod dimensions;
mod edges;
mod grayscale;
mod grid;
mod mapping;
mod resample;

use serde::{Deserialize, Serialize};

pub use charset::{GlyphRamp, EDGE_GLYPH_FALLING, EDGE_GLYPH_RISING, STANDARD_RAMP};
pub use decode::{decode, DecodeError};
pub use dimensions::output_height;
pub use edges::{detect_edges, sobel, SOBEL_X, SOBEL_Y};
pub use grayscale::{to_gray_bt601, to_luminance, LUMINANCE_WEIGHTS};
pub use grid::{GradientField, PixelGrid, RGB_CHANNELS};
pub use mapping::{
    edge_glyph, edge_glyph_degrees, map_structure, map_tonal, tonal_glyph, AsciiArt,
    EDGE_THRESHOLD, SAMPLE_MAX,
};
pub use resample::{resize, resize_to_width};

/// Returned by [`convert`] when the input cannot be decoded.
pub const INVALID_IMAGE: &str = "Invalid image.";

/// Output width used when the caller does not choose one.
pub const DEFAULT_WIDTH: u32 = 100;

/// Which glyphs the renderer may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Edge glyphs where the gradient is strong, density glyphs elsewhere.
    #[default]
    Edges,
    /// Density glyphs only; the edge branch is skipped.
    Tonal,
}

impl RenderMode {
    /// Get a human-readable name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Edges => "edges",
            RenderMode::Tonal => "tonal",
        }
    }
}

/// Per-call rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output width in characters. Must be positive.
    pub width: u32,
    pub mode: RenderMode,
    /// Normalized edge magnitude (0.0-1.0 scale, may exceed 1.0) above
    /// which a cell becomes an edge glyph.
    pub edge_threshold: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            mode: RenderMode::default(),
            edge_threshold: EDGE_THRESHOLD,
        }
    }
}

impl RenderOptions {
    /// Default options with a specific output width.
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Convert encoded image bytes to ASCII art with edge glyphs.
///
/// Returns the rows joined by `\n`, or [`INVALID_IMAGE`] if the bytes are
/// not a decodable image.
pub fn convert(bytes: &[u8], output_width: u32) -> String {
    convert_with(bytes, &RenderOptions::with_width(output_width))
}

/// Like [`convert`], with every option explicit.
pub fn convert_with(bytes: &[u8], options: &RenderOptions) -> String {
    match render(bytes, options) {
        Ok(art) => art.to_string(),
        Err(_) => INVALID_IMAGE.to_string(),
    }
}

/// Decode `bytes` and render them, keeping the decode error.
pub fn render(bytes: &[u8], options: &RenderOptions) -> Result<AsciiArt, DecodeError> {
    let rgb = decode(bytes).map_err(|e| {
        log::debug!("decode failed for {} byte input: {}", bytes.len(), e);
        e
    })?;
    Ok(render_grid(&rgb, options))
}

/// Render an already decoded RGB (or single-channel) grid.
pub fn render_grid(rgb: &PixelGrid<u8>, options: &RenderOptions) -> AsciiArt {
    let width = options.width as usize;
    let height = output_height(rgb.width(), rgb.height(), width);
    log::debug!(
        "rendering {}x{} image as {}x{} ({})",
        rgb.width(),
        rgb.height(),
        width,
        height,
        options.mode.name()
    );

    let luminance = resize(&to_luminance(rgb), width, height);

    match options.mode {
        RenderMode::Tonal => map_tonal(&luminance, &STANDARD_RAMP),
        RenderMode::Edges => {
            let field = detect_edges(rgb);
            let gradient = GradientField {
                magnitude: resize(&field.magnitude, width, height),
                direction: resize(&field.direction, width, height),
            };
            map_structure(&luminance, &gradient, options.edge_threshold, &STANDARD_RAMP)
        }
    }
}

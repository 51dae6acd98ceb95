//! Glyph definitions for ASCII rendering.

/// Glyph emitted for edges running bottom-left to top-right.
pub const EDGE_GLYPH_RISING: char = '/';

/// Glyph emitted for edges running top-left to bottom-right.
pub const EDGE_GLYPH_FALLING: char = '\\';

/// An ordered density ramp, densest glyph first.
///
/// Index 0 stands for intensity 0.0 (black) and the last index for
/// intensity 1.0 (white). Ramps are fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: &'static [char],
}

/// The standard 10-level ramp `"@%#*+=-:. "`.
pub const STANDARD_RAMP: GlyphRamp = GlyphRamp {
    chars: &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '],
};

impl GlyphRamp {
    /// The glyphs in order, densest first.
    pub fn chars(&self) -> &'static [char] {
        self.chars
    }

    /// Number of levels in the ramp.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the ramp has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyph for a normalized intensity.
    ///
    /// The index is `floor(intensity * (len - 1))` clamped to the ramp.
    /// NaN maps to the densest glyph.
    pub fn glyph(&self, intensity: f32) -> char {
        let Some(last) = self.chars.len().checked_sub(1) else {
            return ' ';
        };
        let idx = (intensity * last as f32).floor();
        let idx = if idx.is_nan() { 0 } else { (idx.max(0.0) as usize).min(last) };
        self.chars[idx]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        STANDARD_RAMP
    }
}

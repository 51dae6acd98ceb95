//! CLI enums for clap value parsing.

use clap::ValueEnum;

use crate::ascii::RenderMode;

/// Glyph selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Edge glyphs where the gradient is strong, density ramp elsewhere
    #[default]
    Edges,
    /// Density ramp only
    Tonal,
}

impl From<Mode> for RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Edges => RenderMode::Edges,
            Mode::Tonal => RenderMode::Tonal,
        }
    }
}

//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Mode;

/// Convert raster images to ASCII art with edge-direction glyphs
#[derive(Parser, Debug)]
#[command(name = "ascii-edge")]
#[command(version, about = "Image to ASCII art converter", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image file to ASCII art
    Convert {
        /// Image file to read ("-" for stdin)
        input: PathBuf,

        /// Output width in characters
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
        width: Option<u32>,

        /// Glyph selection mode
        #[arg(long, short)]
        mode: Option<Mode>,

        /// Edge magnitude threshold (normalized, e.g. 0.3)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f32>,

        /// Write the art to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Serve the conversion HTTP API
    Serve {
        /// Address to listen on (overrides config)
        #[arg(long, short)]
        bind: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Parse and validate an edge threshold (finite, >= 0)
fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Threshold must be a non-negative number, got {}", s));
    }
    Ok(value)
}

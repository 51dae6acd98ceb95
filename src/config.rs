//! Configuration file handling for ascii-edge.
//!
//! Loads configuration from `~/.config/ascii-edge/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{RenderMode, RenderOptions, DEFAULT_WIDTH, EDGE_THRESHOLD};

/// Configuration file structure for ascii-edge.
/// Loaded from ~/.config/ascii-edge/config.toml (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            mode: RenderMode::default(),
            edge_threshold: default_edge_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Largest `width` the HTTP endpoint accepts.
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_width: default_max_width(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_edge_threshold() -> f32 {
    EDGE_THRESHOLD
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_max_width() -> u32 {
    500
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

/// Commented template written by `config init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ascii-edge configuration

[render]
# Output width in characters
width = 100
# "edges" (edge glyphs + density ramp) or "tonal" (density ramp only)
mode = "edges"
# Normalized gradient magnitude above which a cell becomes an edge glyph
edge_threshold = 0.3

[server]
# Address for `ascii-edge serve`
bind = "127.0.0.1:8000"
# Largest width accepted over HTTP
max_width = 500
# Largest accepted request body in bytes
max_upload_bytes = 10485760
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or holds
    /// unusable values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            ConfigError::Invalid { message, .. } => ConfigError::Invalid {
                path: path.clone(),
                message,
            },
            other => other,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate().map_err(|message| ConfigError::Invalid {
            path: PathBuf::new(),
            message,
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.render.width == 0 {
            return Err("render.width must be greater than 0".to_string());
        }
        if !self.render.edge_threshold.is_finite() || self.render.edge_threshold < 0.0 {
            return Err(format!(
                "render.edge_threshold must be a non-negative number, got {}",
                self.render.edge_threshold
            ));
        }
        if self.server.max_width == 0 {
            return Err("server.max_width must be greater than 0".to_string());
        }
        if self.render.width > self.server.max_width {
            return Err(format!(
                "render.width ({}) exceeds server.max_width ({})",
                self.render.width, self.server.max_width
            ));
        }
        Ok(())
    }

    /// Rendering options derived from the `[render]` table.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            mode: self.render.mode,
            edge_threshold: self.render.edge_threshold,
        }
    }

    /// Serialize the effective configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid config file '{}': {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-edge").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-edge/config.toml")
        })
}

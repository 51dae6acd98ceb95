//! Subcommand handlers for convert, serve and config actions.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use super::enums::Mode;
use crate::ascii::{self, RenderOptions};
use crate::config::{Config, ConfigError, DEFAULT_CONFIG_TEMPLATE};
use crate::server::{self, AppState};

/// Errors reported by subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}", ascii::INVALID_IMAGE)]
    InvalidImage,

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Server error: {0}")]
    Server(std::io::Error),
}

/// Arguments of the `convert` subcommand.
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub width: Option<u32>,
    pub mode: Option<Mode>,
    pub threshold: Option<f32>,
    pub output: Option<PathBuf>,
}

impl ConvertRequest {
    /// Config defaults overridden by whatever was given on the command line.
    pub fn options(&self, config: &Config) -> RenderOptions {
        let base = config.render_options();
        RenderOptions {
            width: self.width.unwrap_or(base.width),
            mode: self.mode.map(Into::into).unwrap_or(base.mode),
            edge_threshold: self.threshold.unwrap_or(base.edge_threshold),
        }
    }
}

/// Convert one image and write the art to stdout or `--output`.
pub fn run_convert(config: &Config, request: &ConvertRequest) -> Result<(), CommandError> {
    let bytes = read_input(&request.input)?;
    let options = request.options(config);

    let art = ascii::render(&bytes, &options).map_err(|e| {
        log::debug!("{}: {}", request.input.display(), e);
        CommandError::InvalidImage
    })?;
    log::debug!("rendered {}x{} characters", art.width(), art.height());

    let text = format!("{}\n", art);
    match &request.output {
        Some(path) => std::fs::write(path, text).map_err(|e| CommandError::Write {
            path: path.clone(),
            source: e,
        }),
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| CommandError::Write {
                path: PathBuf::from("-"),
                source: e,
            }),
    }
}

fn read_input(input: &Path) -> Result<Vec<u8>, CommandError> {
    let read_err = |e: std::io::Error| CommandError::Read {
        path: input.to_path_buf(),
        source: e,
    };

    if input == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(read_err)?;
        Ok(bytes)
    } else {
        std::fs::read(input).map_err(read_err)
    }
}

/// Start the HTTP server and block until it exits.
pub fn run_serve(config: &Config, bind: Option<String>) -> Result<(), CommandError> {
    let addr = bind.unwrap_or_else(|| config.server.bind.clone());
    let state = AppState::from_config(config);

    let rt = tokio::runtime::Runtime::new().map_err(CommandError::Server)?;
    rt.block_on(server::run(&addr, state))
        .map_err(CommandError::Server)
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: &Path,
    config: &Config,
) -> Result<(), CommandError> {
    match action {
        ConfigAction::Show => {
            if config_path.exists() {
                println!("# Config file: {} (exists)", config_path.display());
            } else {
                println!("# Config file: {} (not found, using defaults)", config_path.display());
            }
            println!();
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CommandError::ConfigExists(config_path.to_path_buf()));
            }

            let write_err = |e: std::io::Error| CommandError::Write {
                path: config_path.to_path_buf(),
                source: e,
            };
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
            std::fs::write(config_path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

//! Terminal UI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Configuration for the terminal UI.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Where tracing output goes. The terminal belongs to the UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Color for X marks (name like "blue" or hex like "#3366ff").
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Show the key help line under the board.
    #[serde(default = "default_show_help")]
    show_help: bool,

    /// File this config was read from; `None` for built-in defaults.
    #[serde(skip)]
    source: Option<PathBuf>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            show_help: default_show_help(),
            source: None,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.source = Some(path.as_ref().to_path_buf());

        config.theme()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                info!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Resolves color names into a [`Theme`].
    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color(&self.x_color)?,
            o: parse_color(&self.o_color)?,
            show_help: self.show_help,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|e| ConfigError::new(format!("Invalid color '{}': {}", name, e)))
}

/// Resolved display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color for X marks.
    pub x: Color,
    /// Color for O marks.
    pub o: Color,
    /// Show the key help line.
    pub show_help: bool,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

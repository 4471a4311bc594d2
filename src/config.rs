//! Application config - board settings and display options from `swapples.toml`

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::BoardConfig;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "swapples.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Validation(#[from] crate::core::ConfigError),
}

/// Top-level application configuration, loadable from TOML.
///
/// ```toml
/// color = true
///
/// [board]
/// width = 8
/// height = 8
/// n_colors = 5
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    /// Color cell letters when stdout is a terminal.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            color: true,
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        Ok(())
    }
}

//! Config module - board shape and color count

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    ColorId, DEFAULT_COLORS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_COLORS, MAX_HEIGHT, MAX_WIDTH,
    MIN_COLORS,
};

/// Board shape and color settings, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub n_colors: ColorId,
    /// Seed for the color source; `None` derives one from the clock.
    pub seed: Option<u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            n_colors: DEFAULT_COLORS,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize, n_colors: ColorId) -> Self {
        BoardConfig {
            width,
            height,
            n_colors,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(ConfigError::Validation(format!(
                "width must be in 1..={}",
                MAX_WIDTH
            )));
        }
        if self.height == 0 || self.height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "height must be in 1..={}",
                MAX_HEIGHT
            )));
        }
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.n_colors) {
            return Err(ConfigError::Validation(format!(
                "n_colors must be in {}..={}",
                MIN_COLORS, MAX_COLORS
            )));
        }
        Ok(())
    }
}

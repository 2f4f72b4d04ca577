//! Runtime configuration.
//!
//! The host app ships a small YAML file (or nothing at all, in which case
//! every field takes its default):
//!
//! ```yaml
//! data_file: foodscribe.json
//! image_dir: Documents
//! max_servings: 12
//! ```

use crate::quantity::DEFAULT_EPSILON;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bundled recipe document
    pub data_file: Utf8PathBuf,
    /// Directory picked images are written to
    pub image_dir: Utf8PathBuf,
    pub min_servings: u32,
    pub max_servings: u32,
    /// Tolerance for the fraction formatter
    pub quantity_epsilon: f64,
    /// Cook timer tick period in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: Utf8PathBuf::from("foodscribe.json"),
            image_dir: Utf8PathBuf::from("images"),
            min_servings: 1,
            max_servings: 12,
            quantity_epsilon: DEFAULT_EPSILON,
            tick_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Parses and validates a YAML config. Empty input yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str::<Config>(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads a YAML config file.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn servings_range(&self) -> RangeInclusive<u32> {
        self.min_servings..=self.max_servings
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_servings == 0 {
            return Err(ConfigError::Invalid(
                "min_servings must be at least 1".to_string(),
            ));
        }
        if self.min_servings > self.max_servings {
            return Err(ConfigError::Invalid(format!(
                "min_servings ({}) exceeds max_servings ({})",
                self.min_servings, self.max_servings
            )));
        }
        if !(self.quantity_epsilon > 0.0) {
            return Err(ConfigError::Invalid(
                "quantity_epsilon must be positive".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

//! Configuration type definitions for the converter
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration. Only the sections a user wants to change need to be
//! written.

use crate::errors::ConversionError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `display.precision`.
pub const MAX_PRECISION: usize = 10;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThermoConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Decimal places shown for inputs and results.
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_true")]
    pub show_symbols: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_symbols: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log destination. `None` logs to stderr.
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_precision() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("thermo.log"))
}

impl ThermoConfig {
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.display.precision > MAX_PRECISION {
            return Err(ConversionError::ConfigError(format!(
                "display.precision must be at most {}, got {}",
                MAX_PRECISION, self.display.precision
            )));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConversionError::ConfigError(format!(
                "Unknown logging.level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if let Some(file) = &self.logging.file {
            if file.as_os_str().is_empty() {
                return Err(ConversionError::ConfigError(
                    "logging.file cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

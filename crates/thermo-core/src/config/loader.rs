//! Configuration loader for YAML files

use crate::config::types::ThermoConfig;
use crate::errors::ConversionError;
use std::fs;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ThermoConfig, ConversionError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            ConversionError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Read configuration from {}", path.display());
        Self::from_str(&content)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<ThermoConfig, ConversionError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(ThermoConfig::default())
        }
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<ThermoConfig, ConversionError> {
        // serde_yaml reads an empty document as unit, not as an empty map.
        let config: ThermoConfig = if content.trim().is_empty() {
            ThermoConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                ConversionError::ConfigError(format!("Failed to parse YAML config: {}", e))
            })?
        };

        config.validate()?;

        Ok(config)
    }
}

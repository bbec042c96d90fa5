//! Configuration resolution and logger setup for the binary

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thermo_core::{ConfigLoader, ConversionError, LoggingConfig, ThermoConfig};

pub const DEFAULT_CONFIG_FILE: &str = "thermo.yaml";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub log_level: Option<String>,
    pub precision: Option<usize>,
}

/// Load the config file and apply command-line overrides.
///
/// An explicitly named file must exist. The default `thermo.yaml` is optional.
pub fn resolve_config(overrides: &Overrides) -> Result<ThermoConfig, ConversionError> {
    let mut config = match &overrides.config {
        Some(path) => ConfigLoader::from_file(path)?,
        None => ConfigLoader::from_file_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(level) = &overrides.log_level {
        config.logging.level = level.clone();
    }
    if let Some(precision) = overrides.precision {
        config.display.precision = precision;
    }

    config.validate()?;
    Ok(config)
}

pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let level_filter = logging.level.parse().unwrap_or(LevelFilter::Info);

    match &logging.file {
        Some(path) => {
            // Logs go to a file so they don't interleave with the prompts.
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            env_logger::Builder::new()
                .filter_level(level_filter)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        None => {
            env_logger::Builder::new().filter_level(level_filter).init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  precision: 5\nlogging:\n  level: warn").unwrap();

        let overrides = Overrides {
            config: Some(file.path().to_path_buf()),
            log_level: Some("debug".to_string()),
            precision: Some(1),
        };
        let config = resolve_config(&overrides).unwrap();
        assert_eq!(config.display.precision, 1);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_file_values_used_without_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  precision: 3").unwrap();

        let overrides = Overrides {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(resolve_config(&overrides).unwrap().display.precision, 3);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let overrides = Overrides {
            config: Some(PathBuf::from("/nonexistent/thermo.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            resolve_config(&overrides),
            Err(ConversionError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let overrides = Overrides {
            config: Some(file.path().to_path_buf()),
            precision: Some(99),
            ..Default::default()
        };
        assert!(resolve_config(&overrides).is_err());
    }
}

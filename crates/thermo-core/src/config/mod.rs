//! Configuration for the interactive converter
//!
//! Settings come from an optional YAML file and only affect presentation and
//! logging. The conversion constants are not configurable.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;


use crate::errors::ConversionError;
use std::path::Path;

/// Load a configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ThermoConfig, ConversionError> {
    ConfigLoader::from_file(path)
}

//! Error types for conversion, parsing and configuration failures
//!
//! Rejected input is an expected outcome in an interactive converter, so every
//! variant here is recoverable. The shell reports the message and asks again.

use crate::direction::ConversionDirection;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{value} is below absolute zero for {direction} (minimum {floor})")]
    OutOfRange {
        value: f64,
        direction: ConversionDirection,
        floor: f64,
    },
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError(err.to_string())
    }
}

//! Core library for converting temperatures between Celsius, Fahrenheit and Kelvin.
//!
//! Everything in this crate is pure and synchronous. The interesting pieces are
//! small: four linear conversion formulas, a fixed table of absolute-zero floors,
//! and the rule that rejects any input sitting below the floor of the scale it is
//! expressed in.
//!
//! # Architecture Overview
//!
//! - **Scales**: the three supported scales and their absolute-zero floors
//! - **Directions**: the closed set of source→target conversions offered to users
//! - **Conversion**: the formulas and the `convert` dispatcher
//! - **Validation**: the absolute-zero check and its checked conversion wrapper
//! - **Configuration**: YAML settings for the interactive shell

pub mod config;
pub mod conversion;
pub mod direction;
pub mod errors;
pub mod scale;
pub mod validation;

pub use config::*;
pub use conversion::convert;
pub use direction::ConversionDirection;
pub use errors::ConversionError;
pub use scale::Scale;
pub use validation::{convert_checked, is_valid, validate};

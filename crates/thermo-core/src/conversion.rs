//! Linear conversion formulas between the supported scales.
//!
//! These functions are total: any `f64` goes in and the exact arithmetic result
//! comes out, with no rounding. Whether an input makes physical sense is decided
//! by [`crate::validation`], not here.

use crate::direction::ConversionDirection;
use crate::scale::Scale;

const CELSIUS_ZERO: f64 = Scale::Celsius.absolute_zero();

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius - CELSIUS_ZERO
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin + CELSIUS_ZERO
}

/// Dispatch `value` to the formula for `direction`.
pub fn convert(value: f64, direction: ConversionDirection) -> f64 {
    let result = match direction {
        ConversionDirection::CelsiusToFahrenheit => celsius_to_fahrenheit(value),
        ConversionDirection::FahrenheitToCelsius => fahrenheit_to_celsius(value),
        ConversionDirection::CelsiusToKelvin => celsius_to_kelvin(value),
        ConversionDirection::KelvinToCelsius => kelvin_to_celsius(value),
    };
    log::debug!("Converted {} via {:?} -> {}", value, direction, result);
    result
}

//! Absolute-zero validation for conversion inputs.

use crate::conversion::convert;
use crate::direction::ConversionDirection;
use crate::errors::ConversionError;

/// True iff `value` is at or above absolute zero in the source scale of
/// `direction`. NaN is never valid.
pub fn is_valid(value: f64, direction: ConversionDirection) -> bool {
    value >= direction.floor()
}

/// Return `value` unchanged, or `OutOfRange` when it sits below the floor.
pub fn validate(value: f64, direction: ConversionDirection) -> Result<f64, ConversionError> {
    if is_valid(value, direction) {
        Ok(value)
    } else {
        log::warn!(
            "Rejected {} for {:?}: floor is {}",
            value,
            direction,
            direction.floor()
        );
        Err(ConversionError::OutOfRange {
            value,
            direction,
            floor: direction.floor(),
        })
    }
}

pub fn convert_checked(value: f64, direction: ConversionDirection) -> Result<f64, ConversionError> {
    validate(value, direction).map(|v| convert(v, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_boundary() {
        assert!(is_valid(-273.15, ConversionDirection::CelsiusToFahrenheit));
        assert!(!is_valid(-273.1500001, ConversionDirection::CelsiusToFahrenheit));
        assert!(is_valid(-273.15, ConversionDirection::CelsiusToKelvin));
        assert!(!is_valid(-300.0, ConversionDirection::CelsiusToKelvin));
    }

    #[test]
    fn test_kelvin_boundary() {
        assert!(is_valid(0.0, ConversionDirection::KelvinToCelsius));
        assert!(!is_valid(-0.0001, ConversionDirection::KelvinToCelsius));
    }

    #[test]
    fn test_fahrenheit_boundary() {
        assert!(is_valid(-459.67, ConversionDirection::FahrenheitToCelsius));
        assert!(!is_valid(-459.68, ConversionDirection::FahrenheitToCelsius));
        // Valid Fahrenheit input, but below the Celsius floor.
        assert!(!is_valid(-300.0, ConversionDirection::CelsiusToFahrenheit));
        assert!(is_valid(-300.0, ConversionDirection::FahrenheitToCelsius));
    }

    #[test]
    fn test_nan_is_rejected() {
        for direction in ConversionDirection::ALL {
            assert!(!is_valid(f64::NAN, direction));
        }
    }

    #[test]
    fn test_validate_reports_floor() {
        let err = validate(-1.0, ConversionDirection::KelvinToCelsius).unwrap_err();
        assert_eq!(
            err,
            ConversionError::OutOfRange {
                value: -1.0,
                direction: ConversionDirection::KelvinToCelsius,
                floor: 0.0,
            }
        );
        assert!(err.to_string().contains("below absolute zero"));
    }

    #[test]
    fn test_convert_checked() {
        assert_eq!(
            convert_checked(100.0, ConversionDirection::CelsiusToFahrenheit),
            Ok(212.0)
        );
        assert!(convert_checked(-500.0, ConversionDirection::FahrenheitToCelsius).is_err());
    }
}

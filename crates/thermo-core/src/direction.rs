//! The closed set of conversions offered by the converter.
//!
//! Each direction pairs a source scale with a target scale and carries the menu
//! code (1 to 4) users pick it by. Parsing from a menu code or a name is the only
//! place an unknown direction can show up, and it is reported as
//! `ConversionError::InvalidChoice` there.

use crate::errors::ConversionError;
use crate::scale::Scale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionDirection {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    CelsiusToKelvin,
    KelvinToCelsius,
}

impl ConversionDirection {
    /// All directions in menu order.
    pub const ALL: [ConversionDirection; 4] = [
        ConversionDirection::CelsiusToFahrenheit,
        ConversionDirection::FahrenheitToCelsius,
        ConversionDirection::CelsiusToKelvin,
        ConversionDirection::KelvinToCelsius,
    ];

    pub const fn source(self) -> Scale {
        match self {
            ConversionDirection::CelsiusToFahrenheit | ConversionDirection::CelsiusToKelvin => {
                Scale::Celsius
            }
            ConversionDirection::FahrenheitToCelsius => Scale::Fahrenheit,
            ConversionDirection::KelvinToCelsius => Scale::Kelvin,
        }
    }

    pub const fn target(self) -> Scale {
        match self {
            ConversionDirection::CelsiusToFahrenheit => Scale::Fahrenheit,
            ConversionDirection::CelsiusToKelvin => Scale::Kelvin,
            ConversionDirection::FahrenheitToCelsius | ConversionDirection::KelvinToCelsius => {
                Scale::Celsius
            }
        }
    }

    /// Lowest input accepted for this direction.
    pub const fn floor(self) -> f64 {
        self.source().absolute_zero()
    }

    pub const fn menu_code(self) -> u8 {
        match self {
            ConversionDirection::CelsiusToFahrenheit => 1,
            ConversionDirection::FahrenheitToCelsius => 2,
            ConversionDirection::CelsiusToKelvin => 3,
            ConversionDirection::KelvinToCelsius => 4,
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.source(), self.target())
    }
}

impl TryFrom<u8> for ConversionDirection {
    type Error = ConversionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.menu_code() == code)
            .ok_or_else(|| {
                ConversionError::InvalidChoice(format!(
                    "{} is not a menu option (expected 1-{})",
                    code,
                    Self::ALL.len()
                ))
            })
    }
}

impl FromStr for ConversionDirection {
    type Err = ConversionError;

    /// Accepts a menu code, a kebab-case name like `celsius-to-kelvin`, or a
    /// short form like `c2k`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        if let Ok(code) = input.parse::<u8>() {
            return Self::try_from(code);
        }

        match input.as_str() {
            "celsius-to-fahrenheit" | "c2f" => Ok(ConversionDirection::CelsiusToFahrenheit),
            "fahrenheit-to-celsius" | "f2c" => Ok(ConversionDirection::FahrenheitToCelsius),
            "celsius-to-kelvin" | "c2k" => Ok(ConversionDirection::CelsiusToKelvin),
            "kelvin-to-celsius" | "k2c" => Ok(ConversionDirection::KelvinToCelsius),
            _ => Err(ConversionError::InvalidChoice(format!(
                "unknown conversion '{}'",
                s.trim()
            ))),
        }
    }
}

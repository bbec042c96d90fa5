//! Temperature scales and their absolute-zero floors.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Lowest physically valid reading per scale, indexed by `Scale::index`.
const ABSOLUTE_ZERO: [(Scale, f64); 3] = [
    (Scale::Celsius, -273.15),
    (Scale::Fahrenheit, -459.67),
    (Scale::Kelvin, 0.0),
];

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    const fn index(self) -> usize {
        match self {
            Scale::Celsius => 0,
            Scale::Fahrenheit => 1,
            Scale::Kelvin => 2,
        }
    }

    /// Absolute zero expressed in this scale.
    pub const fn absolute_zero(self) -> f64 {
        ABSOLUTE_ZERO[self.index()].1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "℃",
            Scale::Fahrenheit => "℉",
            Scale::Kelvin => "K",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

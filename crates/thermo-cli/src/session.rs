//! The interactive read/validate/convert/print loop

use crate::prompt::Prompter;
use std::io;
use thermo_core::{convert, validate, ConversionDirection, DisplayConfig, Scale};

pub const BANNER: &str = "\n--- Temperature Converter ---";
pub const NOT_A_NUMBER: &str = "Invalid input. Please enter a valid number.";
pub const BELOW_ABSOLUTE_ZERO: &str = "Temperature is below absolute zero for this conversion.";
pub const CONTINUE_PROMPT: &str = "Do you want to convert another temperature?";
pub const GOODBYE: &str = "Thank you for using Temperature Converter. Goodbye!";

pub struct Session<P> {
    prompter: P,
    display: DisplayConfig,
}

impl<P: Prompter> Session<P> {
    pub fn new(prompter: P, display: DisplayConfig) -> Self {
        Self { prompter, display }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run until the user declines to continue or input ends. Returns the
    /// number of conversions performed.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut conversions = 0;

        loop {
            self.prompter.say(BANNER)?;

            let Some(direction) = self.prompter.select_direction()? else {
                break;
            };
            log::debug!("Selected {:?}", direction);

            let Some(value) = self.read_temperature(direction)? else {
                break;
            };

            let result = convert(value, direction);
            conversions += 1;
            log::info!("{:?}: {} -> {}", direction, value, result);

            let line = format!(
                "{} = {}",
                format_reading(value, direction.source(), &self.display),
                format_reading(result, direction.target(), &self.display)
            );
            self.prompter.say(&line)?;

            match self.prompter.confirm(CONTINUE_PROMPT)? {
                Some(true) => continue,
                Some(false) | None => break,
            }
        }

        self.prompter.say(GOODBYE)?;
        log::info!("Session ended after {} conversion(s)", conversions);
        Ok(conversions)
    }

    fn read_temperature(&mut self, direction: ConversionDirection) -> io::Result<Option<f64>> {
        let source = direction.source();
        let prompt = format!("Enter the temperature in {}", source);

        loop {
            let Some(raw) = self.prompter.input(&prompt)? else {
                return Ok(None);
            };

            let Some(value) = parse_temperature(&raw) else {
                self.prompter.say(NOT_A_NUMBER)?;
                continue;
            };

            match validate(value, direction) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    log::debug!("{}", e);
                    self.prompter.say(BELOW_ABSOLUTE_ZERO)?;
                }
            }
        }
    }
}

/// Parse a finite number. `inf` and `NaN` are not temperatures.
pub fn parse_temperature(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn format_reading(value: f64, scale: Scale, display: &DisplayConfig) -> String {
    let unit = if display.show_symbols {
        scale.symbol()
    } else {
        scale.name()
    };
    format!("{:.*} {}", display.precision, value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{PlainPrompter, INVALID_CHOICE};
    use std::io::Cursor;

    fn run_script(script: &str, display: DisplayConfig) -> (usize, String) {
        let prompter = PlainPrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = Session::new(prompter, display);
        let count = session.run().unwrap();
        let out = String::from_utf8(session.into_prompter().into_writer()).unwrap();
        (count, out)
    }

    #[test]
    fn test_single_conversion_then_decline() {
        let (count, out) = run_script("1\n100\nn\n", DisplayConfig::default());
        assert_eq!(count, 1);
        assert!(out.contains("--- Temperature Converter ---"));
        assert!(out.contains("Enter the temperature in Celsius (℃): "));
        assert!(out.contains("100.00 ℃ = 212.00 ℉"));
        assert!(out.contains("Do you want to convert another temperature? (y/n): "));
        assert!(out.trim_end().ends_with(GOODBYE));
    }

    #[test]
    fn test_invalid_inputs_are_reprompted() {
        let script = "7\n4\nwarm\n-0.0001\n0\nno\n";
        let (count, out) = run_script(script, DisplayConfig::default());
        assert_eq!(count, 1);
        assert!(out.contains(INVALID_CHOICE));
        assert!(out.contains(NOT_A_NUMBER));
        assert!(out.contains(BELOW_ABSOLUTE_ZERO));
        assert!(out.contains("0.00 K = -273.15 ℃"));
    }

    #[test]
    fn test_multiple_rounds() {
        let (count, out) = run_script("2\n32\ny\n3\n0\nn\n", DisplayConfig::default());
        assert_eq!(count, 2);
        assert!(out.contains("32.00 ℉ = 0.00 ℃"));
        assert!(out.contains("0.00 ℃ = 273.15 K"));
        assert_eq!(out.matches("--- Temperature Converter ---").count(), 2);
    }

    #[test]
    fn test_eof_ends_session_cleanly() {
        let (count, out) = run_script("1\n", DisplayConfig::default());
        assert_eq!(count, 0);
        assert!(out.trim_end().ends_with(GOODBYE));

        let (count, out) = run_script("", DisplayConfig::default());
        assert_eq!(count, 0);
        assert!(out.contains(GOODBYE));
    }

    #[test]
    fn test_display_settings_apply() {
        let display = DisplayConfig {
            precision: 0,
            show_symbols: false,
        };
        let (_, out) = run_script("1\n37\nn\n", display);
        assert!(out.contains("37 Celsius = 99 Fahrenheit"));
    }

    #[test]
    fn test_parse_temperature() {
        assert_eq!(parse_temperature(" -40 "), Some(-40.0));
        assert_eq!(parse_temperature("1e2"), Some(100.0));
        assert_eq!(parse_temperature("NaN"), None);
        assert_eq!(parse_temperature("inf"), None);
        assert_eq!(parse_temperature(""), None);
        assert_eq!(parse_temperature("12C"), None);
    }
}

//! Interactive shell around `thermo-core`
//!
//! The binary shows a menu of conversions, reads and validates a temperature,
//! prints the converted value and asks whether to go again. Prompting sits
//! behind the [`prompt::Prompter`] trait so the same session loop drives both a
//! real terminal and plain line-based input.

pub mod prompt;
pub mod session;
pub mod startup;

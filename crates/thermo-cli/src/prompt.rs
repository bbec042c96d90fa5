//! Prompt front-ends for the interactive session
//!
//! The session only talks to a [`Prompter`]. [`TerminalPrompter`] renders
//! arrow-key menus and confirmations with `dialoguer` when a real terminal is
//! attached. [`PlainPrompter`] reads numbered answers line by line from any
//! reader, which is what piped stdin and the tests use. Every read returns
//! `Ok(None)` once the user is gone (EOF or an aborted prompt).

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::io::{self, BufRead, Write};
use thermo_core::ConversionDirection;

pub const MENU_TITLE: &str = "Select Conversion Type:";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const INVALID_ANSWER: &str = "Please answer y or n.";

pub trait Prompter {
    /// Print a line of output.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Ask for one of the conversion directions.
    fn select_direction(&mut self) -> io::Result<Option<ConversionDirection>>;

    /// Ask for a free-form line of text.
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>>;
}

pub struct PlainPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PlainPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for PlainPrompter<R, W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    fn select_direction(&mut self) -> io::Result<Option<ConversionDirection>> {
        writeln!(self.writer, "{}", MENU_TITLE)?;
        for direction in ConversionDirection::ALL {
            writeln!(self.writer, "{}. {}", direction.menu_code(), direction)?;
        }

        let prompt = format!(
            "\nEnter your choice (1-{}): ",
            ConversionDirection::ALL.len()
        );
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match answer.parse::<ConversionDirection>() {
                Ok(direction) => return Ok(Some(direction)),
                Err(e) => {
                    log::debug!("Rejected menu answer '{}': {}", answer, e);
                    writeln!(self.writer, "{}", INVALID_CHOICE)?;
                }
            }
        }
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.read_line(&format!("{}: ", prompt))
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        let prompt = format!("{} (y/n): ", prompt);
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.writer, "{}", INVALID_ANSWER)?,
            }
        }
    }
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn into_io(err: dialoguer::Error) -> io::Error {
    io::Error::other(err.to_string())
}

impl Prompter for TerminalPrompter {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{}", text)
    }

    fn select_direction(&mut self) -> io::Result<Option<ConversionDirection>> {
        let items: Vec<String> = ConversionDirection::ALL
            .iter()
            .map(ToString::to_string)
            .collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt(MENU_TITLE.trim_end_matches(':'))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(into_io)?;

        Ok(selection.and_then(|index| ConversionDirection::ALL.get(index).copied()))
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map(Some)
            .map_err(into_io)
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(true)
            .interact_opt()
            .map_err(into_io)
    }
}

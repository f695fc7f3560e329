//! Interactive entry of the run parameters
//!
//! Values are read as whitespace-separated tokens, so they may be typed one
//! per line or several to a line.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::io::error::{Result, console_error, invalid_input};

/// Prompt for the lower integration limit
pub const LOWER_LIMIT_PROMPT: &str = "Lower integral limit: ";
/// Prompt for the upper integration limit
pub const UPPER_LIMIT_PROMPT: &str = "Upper integral limit: ";
/// Prompt for the number of subintervals
pub const COUNT_PROMPT: &str = "Number of iterations for integration: ";
/// Prompt for the series summation limit
pub const LIMIT_PROMPT: &str = "Limit for summation: ";

/// Token reader over a console-like input paired with an output for prompts
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Pair an input with the output prompts are written to
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `prompt` and parse the next token as `T`
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends before a token is
    /// available, or the token does not parse
    pub fn ask<T>(&mut self, prompt: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        write!(self.output, "{prompt}").map_err(|source| console_error("writing prompt", source))?;
        self.output
            .flush()
            .map_err(|source| console_error("writing prompt", source))?;

        let token = self
            .next_token()?
            .ok_or_else(|| invalid_input(prompt, &"", &"input ended before a value was entered"))?;

        token
            .parse::<T>()
            .map_err(|error| invalid_input(prompt, &token, &error))
    }

    /// Use `value` if present, otherwise prompt for it
    ///
    /// # Errors
    ///
    /// Returns an error if prompting is required and fails
    pub fn ask_unless<T>(&mut self, value: Option<T>, prompt: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match value {
            Some(value) => Ok(value),
            None => self.ask(prompt),
        }
    }

    /// Writer the prompts go to
    pub const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Block until one more token (or end of input) arrives
    ///
    /// # Errors
    ///
    /// Returns an error if reading the console fails
    pub fn pause(&mut self) -> Result<()> {
        self.next_token().map(|_| ())
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| console_error("reading input", source))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

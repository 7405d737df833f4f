//! Validated interactive input.
//!
//! The prompter reads answers line by line from any `BufRead` and writes
//! questions to any `Write`, so sessions can be driven from tests.

use std::io::{BufRead, ErrorKind, Write};

use crate::error::Result;

const YES_NO_RETRY: &str = "Error: please enter 'y' or 'n' as a response: ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the answer without its line terminator.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails, reading fails, or input ends.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_answer()
    }

    /// Ask a yes/no question, re-asking until the answer is `y` or `n` in any case.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails, reading fails, or input ends.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let mut answer = self.ask(question)?;
        loop {
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => answer = self.ask(YES_NO_RETRY)?,
            }
        }
    }

    /// Returns the underlying writer, for inspecting what was asked.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            )
            .into());
        }
        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(answer.to_string())
    }
}

/// `Some(true)` for `y`, `Some(false)` for `n` (any case), `None` otherwise.
#[must_use]
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    if answer.eq_ignore_ascii_case("y") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

use std::io::{self, BufRead, ErrorKind};

use super::tokenizer::tokens;

/// Counts words line by line. A line break always ends the current token.
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCounter;

impl WordCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Number of words in a single line.
    #[must_use]
    pub fn count_line(&self, line: &str) -> usize {
        tokens(line).filter(|token| token.is_word()).count()
    }

    /// Number of words across a sequence of lines.
    #[must_use]
    pub fn count_lines<I, S>(&self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.count_line(line.as_ref()))
            .sum()
    }

    /// Number of words in an in-memory document.
    #[must_use]
    pub fn count(&self, source: &str) -> usize {
        self.count_lines(split_lines(source))
    }

    /// Count words from a buffered reader, one line at a time.
    ///
    /// # Errors
    /// Returns the first I/O error raised while reading, including invalid UTF-8.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> io::Result<usize> {
        let mut words = 0;
        let mut chunk = Vec::new();
        loop {
            chunk.clear();
            if reader.read_until(b'\n', &mut chunk)? == 0 {
                return Ok(words);
            }
            let text = std::str::from_utf8(&chunk)
                .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
            words += self.count_lines(split_lines(text));
        }
    }
}

// The empty piece between `\r` and `\n` holds no words, so `\r\n` needs no special case.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;

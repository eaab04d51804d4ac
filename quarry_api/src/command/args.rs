//! Argument Reader
//!
//! Splits a raw command line on whitespace and walks the resulting tokens
//! with a cursor. Parsers only ever move the cursor forward; rewinding goes
//! through [`Mark`] snapshots so a failed parse can be undone cleanly.
use crate::command::ParseError;

/// An opaque cursor snapshot, only meaningful for the reader that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// A forward cursor over the whitespace-separated arguments of one command line.
#[derive(Debug, Clone)]
pub struct ArgReader<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> ArgReader<'a> {
    /// Tokenize `input`. Runs of whitespace collapse; leading and trailing
    /// whitespace produce no tokens.
    pub fn new(input: &'a str) -> ArgReader<'a> {
        ArgReader {
            tokens: input.split_whitespace().collect(),
            cursor: 0,
        }
    }

    /// Zero-based index of the next argument to be read.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total number of arguments on the line.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// How many arguments are left to read.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Look at the next argument without advancing.
    ///
    /// # Errors
    /// `EndOfInput` if every argument has already been read.
    pub fn peek(&self) -> Result<&'a str, ParseError> {
        self.tokens
            .get(self.cursor)
            .copied()
            .ok_or_else(|| ParseError::end_of_input(self.cursor))
    }

    /// Read the next argument and advance past it.
    ///
    /// # Errors
    /// `EndOfInput` if every argument has already been read.
    pub fn next(&mut self) -> Result<&'a str, ParseError> {
        let token = self.peek()?;
        self.cursor += 1;
        Ok(token)
    }

    /// Join every unread argument with single spaces and advance to the end.
    /// Returns an empty string when nothing remains.
    pub fn remaining_joined(&mut self) -> String {
        let joined = self.tokens[self.cursor..].join(" ");
        self.cursor = self.tokens.len();
        joined
    }

    /// Snapshot the cursor for a later [`reset`](ArgReader::reset).
    pub fn mark(&self) -> Mark {
        Mark(self.cursor)
    }

    /// Rewind (or fast-forward) the cursor to a snapshot taken earlier.
    pub fn reset(&mut self, mark: Mark) {
        self.cursor = mark.0.min(self.tokens.len());
    }
}

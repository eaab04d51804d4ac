//! Command Module
//!
//! Parameter parsing for plugin commands. A command line is tokenized into an
//! [`args::ArgReader`], and each parameter's [`parameter::ValueParser`] pulls
//! the arguments it needs, producing a typed value or a [`ParseError`] that
//! leaves the reader where it started.

pub mod args;
pub mod context;
pub mod parameter;

pub use args::{ArgReader, Mark};
pub use context::{CommandCaller, CommandContext};

use thiserror::Error;

/// Error type produced by user-supplied value and choice suppliers.
pub type SupplierError = Box<dyn std::error::Error + Send + Sync>;

/// Classifies what went wrong during a parse attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The reader ran out of arguments.
    EndOfInput,
    /// An argument was present but did not match anything acceptable.
    NoMatch,
    /// A configured supplier failed while producing a value or choice set.
    SupplierFailure,
    /// A registry could not carry out a lookup at all.
    LookupFailure,
}

/// A failed parse attempt.
///
/// `position` is the zero-based index of the argument that caused the
/// failure. Errors returned through [`parameter::ValueParser::parse`] never
/// leave the reader advanced.
#[derive(Debug, Error)]
#[error("{message} (argument {position})")]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
    message: String,
    source: Option<SupplierError>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize, message: impl Into<String>) -> ParseError {
        ParseError {
            kind,
            position,
            message: message.into(),
            source: None,
        }
    }

    /// A reader exhausted mid-parse.
    pub fn end_of_input(position: usize) -> ParseError {
        ParseError::new(ParseErrorKind::EndOfInput, position, "no more arguments to read")
    }

    /// An argument that matched nothing acceptable.
    pub fn no_match(position: usize, message: impl Into<String>) -> ParseError {
        ParseError::new(ParseErrorKind::NoMatch, position, message)
    }

    /// A supplier that failed while the parser was consulting it.
    pub fn supplier_failure(position: usize, source: SupplierError) -> ParseError {
        ParseError {
            kind: ParseErrorKind::SupplierFailure,
            position,
            message: format!("value supplier failed: {source}"),
            source: Some(source),
        }
    }

    /// A registry lookup that could not be carried out.
    pub fn lookup_failure(position: usize, source: SupplierError) -> ParseError {
        ParseError {
            kind: ParseErrorKind::LookupFailure,
            position,
            message: format!("registry lookup failed: {source}"),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_position() {
        let err = ParseError::no_match(2, "'maybe' is not a valid choice");
        assert_eq!(err.to_string(), "'maybe' is not a valid choice (argument 2)");
        assert_eq!(err.kind(), ParseErrorKind::NoMatch);
    }

    #[test]
    fn supplier_failures_keep_their_source() {
        let inner: SupplierError = "backing store offline".into();
        let err = ParseError::supplier_failure(0, inner);
        assert_eq!(err.kind(), ParseErrorKind::SupplierFailure);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.message().contains("backing store offline"));
    }
}

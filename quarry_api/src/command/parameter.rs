//! Value Parameters
//!
//! A value parser turns raw arguments into a typed value. Six families are
//! provided: catalog lookups, fixed and dynamic choice sets, literal
//! sequences, formatted text, and enum variants. Each is configured through
//! a small validating builder; the free functions at the bottom of this
//! module are the way to obtain one.

pub mod catalog;
pub mod choices;
pub mod enums;
pub mod literal;
pub mod text;

pub use catalog::{CatalogedBuilder, CatalogedParser};
pub use choices::{DynamicChoicesBuilder, DynamicChoicesParser, StaticChoicesBuilder, StaticChoicesParser};
pub use enums::{EnumParser, NamedVariants};
pub use literal::{LiteralBuilder, LiteralParser};
pub use text::{PlainTextSerializer, TextBuilder, TextParser, TextSerializer};

use std::sync::Arc;

use thiserror::Error;

use crate::command::args::ArgReader;
use crate::command::context::CommandContext;
use crate::command::{ParseError, SupplierError};
use crate::registry::CatalogRegistry;

/// Fallible supplier of a parse result value.
pub type ValueSupplier<T> = Arc<dyn Fn() -> Result<T, SupplierError> + Send + Sync>;

/// Builder configurations rejected by `build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no choices were added")]
    EmptyChoices,
    #[error("no choice source was configured")]
    MissingChoiceSource,
    #[error("both pair and split choice sources were configured")]
    ConflictingChoiceSources,
    #[error("split choice source needs both names and a resolver")]
    SplitSourceIncomplete,
    #[error("literal sequence is empty")]
    EmptyLiteral,
    #[error("no literal sequence was configured")]
    MissingLiteral,
    #[error("no return value was configured")]
    MissingReturnValue,
    #[error("no text serializer was configured")]
    MissingSerializer,
}

/// A reusable parser for one command parameter.
///
/// Parsers are immutable once built and safe to share across threads. The
/// provided [`parse`](ValueParser::parse) wrapper makes every parser
/// transactional: when it returns an error the reader's cursor is back where
/// parsing began.
pub trait ValueParser<T>: Send + Sync {
    /// Parse a value, consuming arguments as needed. On failure the reader
    /// is left wherever the attempt stopped; callers normally want the
    /// rewinding [`parse`](ValueParser::parse) instead.
    ///
    /// # Errors
    /// A [`ParseError`] describing why no value could be produced.
    fn parse_value(&self, reader: &mut ArgReader<'_>, context: &CommandContext) -> Result<T, ParseError>;

    /// Parse a value, rewinding the reader when the attempt fails.
    ///
    /// # Errors
    /// A [`ParseError`] describing why no value could be produced.
    fn parse(&self, reader: &mut ArgReader<'_>, context: &CommandContext) -> Result<T, ParseError> {
        let mark = reader.mark();
        match self.parse_value(reader, context) {
            Ok(value) => Ok(value),
            Err(err) => {
                reader.reset(mark);
                Err(err)
            },
        }
    }

    /// Completion suggestions for a partial final argument.
    fn complete(&self, _partial: &str, _context: &CommandContext) -> Vec<String> {
        Vec::new()
    }

    /// One-line usage hint, given the parameter's declared key.
    fn usage(&self, key: &str) -> String {
        format!("<{key}>")
    }
}

/// How many choices a usage string spells out before falling back to the
/// parameter key.
pub(crate) const USAGE_CHOICE_LIMIT: usize = 5;

/// The shared usage rule for choice-style parsers: enumerate the choices
/// only when enabled and the set is small enough to read.
pub(crate) fn choices_usage<S: AsRef<str>>(key: &str, show_in_usage: bool, names: &[S]) -> String {
    if show_in_usage && !names.is_empty() && names.len() <= USAGE_CHOICE_LIMIT {
        let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        format!("<{}>", names.join("|"))
    } else {
        format!("<{key}>")
    }
}

/// Start building a cataloged-type parameter resolving through `registry`.
pub fn cataloged<T>(registry: Arc<dyn CatalogRegistry<T>>) -> CatalogedBuilder<T> {
    CatalogedBuilder::new(registry)
}

/// Start building a static-choices parameter.
///
/// ```
/// use quarry_api::command::args::ArgReader;
/// use quarry_api::command::context::{CommandCaller, CommandContext};
/// use quarry_api::command::parameter::{self, ValueParser};
///
/// let parser = parameter::static_choices()
///     .choice("on", true)
///     .choice("off", false)
///     .build()
///     .unwrap();
///
/// let mut reader = ArgReader::new("off fast");
/// let context = CommandContext::new(CommandCaller::Console);
/// assert_eq!(parser.parse(&mut reader, &context).unwrap(), false);
/// assert_eq!(reader.position(), 1);
/// ```
pub fn static_choices<T>() -> StaticChoicesBuilder<T> {
    StaticChoicesBuilder::new()
}

/// Start building a dynamic-choices parameter.
pub fn dynamic_choices<T>() -> DynamicChoicesBuilder<T> {
    DynamicChoicesBuilder::new()
}

/// Start building an ordered-literal parameter.
pub fn literal<T>() -> LiteralBuilder<T> {
    LiteralBuilder::new()
}

/// Start building a formatted-text parameter.
pub fn text() -> TextBuilder {
    TextBuilder::new()
}

/// A parser over the variants of `T`, matched by name, case-insensitively.
pub fn enum_choices<T: NamedVariants>() -> EnumParser<T> {
    EnumParser::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ParseErrorKind;
    use crate::command::context::CommandCaller;

    /// Consumes two tokens; fails on the second if it is not "ok".
    struct TwoTokenParser;

    impl ValueParser<String> for TwoTokenParser {
        fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<String, ParseError> {
            let first = reader.next()?.to_string();
            let position = reader.position();
            let second = reader.next()?;
            if second == "ok" {
                Ok(first)
            } else {
                Err(ParseError::no_match(position, format!("'{second}' is not ok")))
            }
        }
    }

    #[test]
    fn parse_rewinds_the_reader_on_failure() {
        let context = CommandContext::new(CommandCaller::Console);
        let mut reader = ArgReader::new("alpha bad rest");

        let err = TwoTokenParser.parse(&mut reader, &context).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::NoMatch);
        assert_eq!(err.position(), 1);
        assert_eq!(reader.position(), 0, "cursor must be restored");

        assert_eq!(TwoTokenParser.parse(&mut ArgReader::new("alpha ok"), &context).unwrap(), "alpha");
    }

    #[test]
    fn parse_leaves_consumed_tokens_behind_on_success() {
        let context = CommandContext::new(CommandCaller::Console);
        let mut reader = ArgReader::new("alpha ok trailing");
        TwoTokenParser.parse(&mut reader, &context).unwrap();
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn default_usage_and_completion() {
        let context = CommandContext::new(CommandCaller::Console);
        assert_eq!(TwoTokenParser.usage("pair"), "<pair>");
        assert!(TwoTokenParser.complete("a", &context).is_empty());
    }

    #[test]
    fn choices_usage_follows_the_five_choice_rule() {
        let five = ["a", "b", "c", "d", "e"];
        let six = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(choices_usage("key", true, &five), "<a|b|c|d|e>");
        assert_eq!(choices_usage("key", true, &six), "<key>");
        assert_eq!(choices_usage("key", false, &five), "<key>");
        assert_eq!(choices_usage::<&str>("key", true, &[]), "<key>");
    }
}

//! Literal Parameters
//!
//! Matches a fixed sequence of arguments word for word, then returns a
//! configured value. Useful for subcommand-style phrases (`set time to ...`)
//! where the words themselves carry no information beyond having been said.
use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::command::args::ArgReader;
use crate::command::context::CommandContext;
use crate::command::parameter::{ConfigError, ValueParser, ValueSupplier};
use crate::command::{ParseError, SupplierError};

type LiteralSupplier = Arc<dyn Fn() -> Result<Vec<String>, SupplierError> + Send + Sync>;

/// Builder for [`LiteralParser`]. Obtained from
/// [`parameter::literal`](crate::command::parameter::literal).
///
/// Both a literal sequence and a return value are required; each can be given
/// as a fixed value or as a supplier re-consulted on every parse.
pub struct LiteralBuilder<T> {
    literals: Option<LiteralSupplier>,
    static_literals_empty: bool,
    result: Option<ValueSupplier<T>>,
}

impl<T> LiteralBuilder<T> {
    pub(crate) fn new() -> LiteralBuilder<T> {
        LiteralBuilder {
            literals: None,
            static_literals_empty: false,
            result: None,
        }
    }

    /// Match exactly this sequence of words. Replaces any earlier sequence
    /// or sequence supplier.
    pub fn literals<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fixed: Vec<String> = literals.into_iter().map(Into::into).collect();
        self.static_literals_empty = fixed.is_empty();
        self.literals = Some(Arc::new(move || Ok(fixed.clone())));
        self
    }

    /// Re-read the sequence of words from `supplier` on every parse.
    /// Replaces any earlier sequence or sequence supplier.
    pub fn literals_supplied<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Result<Vec<String>, SupplierError> + Send + Sync + 'static,
    {
        self.static_literals_empty = false;
        self.literals = Some(Arc::new(supplier));
        self
    }

    /// Return a clone of `value` on every successful match.
    pub fn result(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.result = Some(Arc::new(move || Ok(value.clone())));
        self
    }

    /// Produce the return value through a fallible supplier instead.
    pub fn result_supplied<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Result<T, SupplierError> + Send + Sync + 'static,
    {
        self.result = Some(Arc::new(supplier));
        self
    }

    /// Return to the freshly-created state.
    pub fn reset(mut self) -> Self {
        self.literals = None;
        self.static_literals_empty = false;
        self.result = None;
        self
    }

    /// Finish the parser.
    ///
    /// # Errors
    /// - `MissingLiteral` if no sequence was configured
    /// - `EmptyLiteral` if a fixed sequence was configured with no words
    /// - `MissingReturnValue` if no return value was configured
    pub fn build(&self) -> Result<LiteralParser<T>, ConfigError> {
        let Some(literals) = &self.literals else {
            return Err(ConfigError::MissingLiteral);
        };
        if self.static_literals_empty {
            return Err(ConfigError::EmptyLiteral);
        }
        let Some(result) = &self.result else {
            return Err(ConfigError::MissingReturnValue);
        };
        Ok(LiteralParser {
            literals: Arc::clone(literals),
            result: Arc::clone(result),
        })
    }
}

/// Consumes one argument per configured word, matching each case-sensitively.
pub struct LiteralParser<T> {
    literals: LiteralSupplier,
    result: ValueSupplier<T>,
}

impl<T> fmt::Debug for LiteralParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiteralParser").finish_non_exhaustive()
    }
}

impl<T> ValueParser<T> for LiteralParser<T> {
    fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<T, ParseError> {
        let start = reader.position();
        let expected = (self.literals)().map_err(|err| ParseError::supplier_failure(start, err))?;
        // a supplier can legally produce an empty sequence at parse time;
        // nothing can match it, and nothing has been consumed yet
        if expected.is_empty() {
            return Err(ParseError::no_match(start, "literal sequence is currently empty"));
        }
        for literal in &expected {
            let position = reader.position();
            let token = reader.next()?;
            if token != literal {
                return Err(ParseError::no_match(
                    position,
                    format!("expected '{literal}', found '{token}'"),
                ));
            }
        }
        (self.result)().map_err(|err| ParseError::supplier_failure(start, err))
    }

    fn complete(&self, partial: &str, _context: &CommandContext) -> Vec<String> {
        // only the first word of the sequence can be completed from here
        match (self.literals)() {
            Ok(expected) => expected
                .first()
                .filter(|first| first.starts_with(partial))
                .map(|first| vec![first.clone()])
                .unwrap_or_default(),
            Err(err) => {
                warn!("literal supplier failed during completion: {err}");
                Vec::new()
            },
        }
    }

    fn usage(&self, key: &str) -> String {
        match (self.literals)() {
            Ok(expected) if !expected.is_empty() => expected.join(" "),
            Ok(_) => format!("<{key}>"),
            Err(err) => {
                warn!("literal supplier failed during usage: {err}");
                format!("<{key}>")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::command::ParseErrorKind;
    use crate::command::context::CommandCaller;
    use crate::command::parameter;

    fn context() -> CommandContext {
        CommandContext::new(CommandCaller::Console)
    }

    #[test]
    fn full_match_consumes_the_whole_sequence() {
        let parser = parameter::literal()
            .literals(["set", "time", "to"])
            .result(42_u32)
            .build()
            .unwrap();

        let mut reader = ArgReader::new("set time to 100");
        assert_eq!(parser.parse(&mut reader, &context()).unwrap(), 42);
        assert_eq!(reader.position(), 3, "exactly |literals| tokens consumed");
        assert_eq!(reader.peek().unwrap(), "100");
    }

    #[test]
    fn mid_sequence_mismatch_restores_the_cursor() {
        let parser = parameter::literal()
            .literals(["set", "time", "to"])
            .result(42_u32)
            .build()
            .unwrap();

        let mut reader = ArgReader::new("set time now");
        let err = parser.parse(&mut reader, &context()).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::NoMatch);
        assert_eq!(err.position(), 2, "failure reported at the mismatching word");
        assert_eq!(reader.position(), 0, "cursor restored");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let parser = parameter::literal()
            .literals(["Set"])
            .result(())
            .build()
            .unwrap();

        assert!(parser.parse(&mut ArgReader::new("set"), &context()).is_err());
        assert!(parser.parse(&mut ArgReader::new("Set"), &context()).is_ok());
    }

    #[test]
    fn running_out_of_arguments_is_end_of_input() {
        let parser = parameter::literal()
            .literals(["set", "time", "to"])
            .result(42_u32)
            .build()
            .unwrap();

        let mut reader = ArgReader::new("set time");
        let err = parser.parse(&mut reader, &context()).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::EndOfInput);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn build_validates_the_configuration() {
        assert_eq!(
            parameter::literal::<u32>().build().unwrap_err(),
            ConfigError::MissingLiteral
        );
        assert_eq!(
            parameter::literal::<u32>()
                .literals(Vec::<String>::new())
                .result(1)
                .build()
                .unwrap_err(),
            ConfigError::EmptyLiteral
        );
        assert_eq!(
            parameter::literal::<u32>().literals(["go"]).build().unwrap_err(),
            ConfigError::MissingReturnValue
        );
    }

    #[test]
    fn supplied_sequence_is_read_per_parse() {
        let words: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec!["start".to_string()]));
        let supplier_words = Arc::clone(&words);
        let parser = parameter::literal()
            .literals_supplied(move || Ok(supplier_words.lock().unwrap().clone()))
            .result("done")
            .build()
            .unwrap();

        assert_eq!(parser.parse(&mut ArgReader::new("start"), &context()).unwrap(), "done");

        *words.lock().unwrap() = vec!["stop".to_string()];
        assert!(parser.parse(&mut ArgReader::new("start"), &context()).is_err());
        assert_eq!(parser.parse(&mut ArgReader::new("stop"), &context()).unwrap(), "done");
    }

    #[test]
    fn empty_supplied_sequence_is_no_match_without_consuming() {
        let parser = parameter::literal()
            .literals_supplied(|| Ok(Vec::new()))
            .result(1_u32)
            .build()
            .unwrap();

        let mut reader = ArgReader::new("anything");
        let err = parser.parse(&mut reader, &context()).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::NoMatch);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn result_supplier_failure_wraps() {
        let parser = parameter::literal::<u32>()
            .literals(["go"])
            .result_supplied(|| Err("value store offline".into()))
            .build()
            .unwrap();

        let mut reader = ArgReader::new("go");
        let err = parser.parse(&mut reader, &context()).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::SupplierFailure);
        assert_eq!(reader.position(), 0, "cursor restored even after a full word match");
    }

    #[test]
    fn usage_is_the_sequence_and_completion_offers_the_first_word() {
        let parser = parameter::literal()
            .literals(["set", "time", "to"])
            .result(())
            .build()
            .unwrap();

        assert_eq!(parser.usage("when"), "set time to");
        assert_eq!(parser.complete("s", &context()), vec!["set"]);
        assert!(parser.complete("t", &context()).is_empty());

        let broken = parameter::literal()
            .literals_supplied(|| Err("offline".into()))
            .result(())
            .build()
            .unwrap();
        assert_eq!(broken.usage("when"), "<when>");
        assert!(broken.complete("s", &context()).is_empty());
    }

    #[test]
    fn reset_then_reconfigure_builds_an_equivalent_parser() {
        let builder = parameter::literal().literals(["old"]).result(1_u32).reset();
        assert_eq!(builder.build().unwrap_err(), ConfigError::MissingLiteral);

        let rebuilt = builder.literals(["new"]).result(2).build().unwrap();
        assert_eq!(rebuilt.parse(&mut ArgReader::new("new"), &context()).unwrap(), 2);
    }
}

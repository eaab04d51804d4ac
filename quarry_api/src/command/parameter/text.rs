//! Text Parameters
//!
//! Hands raw arguments to a [`TextSerializer`] and returns the [`Text`] it
//! produces. Either one argument is taken, or everything left on the line
//! joined with single spaces, depending on the builder's
//! `consume_all_arguments` flag.
use std::fmt;
use std::sync::Arc;

use quarry_data::Text;

use crate::command::args::ArgReader;
use crate::command::context::CommandContext;
use crate::command::parameter::{ConfigError, ValueParser};
use crate::command::{ParseError, SupplierError};

/// Turns a raw string into a [`Text`] value.
///
/// Hosts supply serializers for their own formats (legacy color codes, JSON
/// components, markup); [`PlainTextSerializer`] covers the unformatted case.
pub trait TextSerializer: Send + Sync {
    /// Deserialize `input` into a text value.
    ///
    /// # Errors
    /// Any error describing why the input is not valid for this format.
    fn deserialize(&self, input: &str) -> Result<Text, SupplierError>;
}

/// The identity serializer: the input is the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSerializer;

impl TextSerializer for PlainTextSerializer {
    fn deserialize(&self, input: &str) -> Result<Text, SupplierError> {
        Ok(Text::plain(input))
    }
}

type SerializerSupplier = Arc<dyn Fn() -> Result<Arc<dyn TextSerializer>, SupplierError> + Send + Sync>;

/// Builder for [`TextParser`]. Obtained from
/// [`parameter::text`](crate::command::parameter::text).
pub struct TextBuilder {
    serializer: Option<SerializerSupplier>,
    consume_all: bool,
}

impl TextBuilder {
    pub(crate) fn new() -> TextBuilder {
        TextBuilder {
            serializer: None,
            consume_all: false,
        }
    }

    /// Use this serializer on every parse. Replaces any earlier serializer
    /// or serializer supplier.
    pub fn serializer(mut self, serializer: impl TextSerializer + 'static) -> Self {
        let shared: Arc<dyn TextSerializer> = Arc::new(serializer);
        self.serializer = Some(Arc::new(move || Ok(Arc::clone(&shared))));
        self
    }

    /// Fetch the serializer from `supplier` on every parse. Replaces any
    /// earlier serializer or serializer supplier.
    pub fn serializer_supplied<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn TextSerializer>, SupplierError> + Send + Sync + 'static,
    {
        self.serializer = Some(Arc::new(supplier));
        self
    }

    /// Whether the parser takes everything left on the line (joined with
    /// single spaces) instead of a single argument. Off by default.
    pub fn consume_all_arguments(mut self, consume_all: bool) -> Self {
        self.consume_all = consume_all;
        self
    }

    /// Return to the freshly-created state.
    pub fn reset(mut self) -> Self {
        self.serializer = None;
        self.consume_all = false;
        self
    }

    /// Finish the parser.
    ///
    /// # Errors
    /// `ConfigError::MissingSerializer` if no serializer was supplied.
    pub fn build(&self) -> Result<TextParser, ConfigError> {
        let Some(serializer) = &self.serializer else {
            return Err(ConfigError::MissingSerializer);
        };
        Ok(TextParser {
            serializer: Arc::clone(serializer),
            consume_all: self.consume_all,
        })
    }
}

/// Parses one argument, or the whole remainder of the line, into [`Text`].
pub struct TextParser {
    serializer: SerializerSupplier,
    consume_all: bool,
}

impl fmt::Debug for TextParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextParser")
            .field("consume_all", &self.consume_all)
            .finish_non_exhaustive()
    }
}

impl ValueParser<Text> for TextParser {
    fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<Text, ParseError> {
        let position = reader.position();
        let raw = if self.consume_all {
            if !reader.has_next() {
                return Err(ParseError::end_of_input(position));
            }
            reader.remaining_joined()
        } else {
            reader.next()?.to_string()
        };
        let serializer = (self.serializer)().map_err(|err| ParseError::supplier_failure(position, err))?;
        serializer
            .deserialize(&raw)
            .map_err(|err| ParseError::no_match(position, format!("'{raw}' is not valid text: {err}")))
    }
}

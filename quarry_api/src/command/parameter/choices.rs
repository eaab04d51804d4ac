//! Choice Parameters
//!
//! Two flavors. Static choices are fixed when the parser is built, each key
//! carrying its own value supplier. Dynamic choices are re-read from a host
//! supplier on every parse, as one consistent snapshot per attempt.
use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::command::args::ArgReader;
use crate::command::context::CommandContext;
use crate::command::parameter::{ConfigError, USAGE_CHOICE_LIMIT, ValueParser, ValueSupplier, choices_usage};
use crate::command::{ParseError, SupplierError};

fn no_such_choice(token: &str, names: &[&str]) -> String {
    if names.is_empty() || names.len() > USAGE_CHOICE_LIMIT {
        format!("'{token}' is not a valid choice")
    } else {
        format!("'{token}' is not a valid choice (valid: {})", names.join(", "))
    }
}

/// Builder for [`StaticChoicesParser`]. Obtained from
/// [`parameter::static_choices`](crate::command::parameter::static_choices).
pub struct StaticChoicesBuilder<T> {
    choices: Vec<(String, ValueSupplier<T>)>,
    show_in_usage: bool,
}

impl<T> StaticChoicesBuilder<T> {
    pub(crate) fn new() -> StaticChoicesBuilder<T> {
        StaticChoicesBuilder {
            choices: Vec::new(),
            show_in_usage: false,
        }
    }

    /// Keys keep their insertion order; re-adding a key replaces its
    /// supplier in place.
    fn put_choice(&mut self, key: String, supplier: ValueSupplier<T>) {
        if let Some(entry) = self.choices.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = supplier;
        } else {
            self.choices.push((key, supplier));
        }
    }

    /// Add one choice that returns a clone of `value` on every parse.
    pub fn choice(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.put_choice(key.into(), Arc::new(move || Ok(value.clone())));
        self
    }

    /// Add several keys sharing one fallible value supplier.
    pub fn choices<I, S, F>(mut self, keys: I, supplier: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn() -> Result<T, SupplierError> + Send + Sync + 'static,
    {
        let supplier: ValueSupplier<T> = Arc::new(supplier);
        for key in keys {
            self.put_choice(key.into(), Arc::clone(&supplier));
        }
        self
    }

    /// Whether usage enumerates the choices (off by default; the
    /// five-or-fewer rule still applies when enabled).
    pub fn show_in_usage(mut self, show: bool) -> Self {
        self.show_in_usage = show;
        self
    }

    /// Return to the freshly-created state.
    pub fn reset(mut self) -> Self {
        self.choices.clear();
        self.show_in_usage = false;
        self
    }

    /// Finish the parser.
    ///
    /// # Errors
    /// `ConfigError::EmptyChoices` if no choice was added.
    pub fn build(&self) -> Result<StaticChoicesParser<T>, ConfigError> {
        if self.choices.is_empty() {
            return Err(ConfigError::EmptyChoices);
        }
        Ok(StaticChoicesParser {
            choices: self.choices.clone(),
            show_in_usage: self.show_in_usage,
        })
    }
}

/// Parses one argument against a fixed choice set.
pub struct StaticChoicesParser<T> {
    choices: Vec<(String, ValueSupplier<T>)>,
    show_in_usage: bool,
}

impl<T> fmt::Debug for StaticChoicesParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.choices.iter().map(|(key, _)| key.as_str()).collect();
        f.debug_struct("StaticChoicesParser")
            .field("choices", &keys)
            .field("show_in_usage", &self.show_in_usage)
            .finish_non_exhaustive()
    }
}

impl<T> ValueParser<T> for StaticChoicesParser<T> {
    fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<T, ParseError> {
        let position = reader.position();
        let token = reader.next()?;
        let Some((_, supplier)) = self.choices.iter().find(|(key, _)| key.as_str() == token) else {
            let names: Vec<&str> = self.choices.iter().map(|(key, _)| key.as_str()).collect();
            return Err(ParseError::no_match(position, no_such_choice(token, &names)));
        };
        supplier().map_err(|err| ParseError::supplier_failure(position, err))
    }

    fn complete(&self, partial: &str, _context: &CommandContext) -> Vec<String> {
        self.choices
            .iter()
            .filter(|(key, _)| key.starts_with(partial))
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn usage(&self, key: &str) -> String {
        let names: Vec<&str> = self.choices.iter().map(|(choice, _)| choice.as_str()).collect();
        choices_usage(key, self.show_in_usage, &names)
    }
}

type PairSupplier<T> = Arc<dyn Fn() -> Result<Vec<(String, T)>, SupplierError> + Send + Sync>;
type NameSupplier = Arc<dyn Fn() -> Result<Vec<String>, SupplierError> + Send + Sync>;
type ChoiceResolver<T> = Arc<dyn Fn(&str) -> Option<T> + Send + Sync>;

/// Where a dynamic parser draws its choice set from.
enum ChoiceSource<T> {
    Pairs(PairSupplier<T>),
    Split { names: NameSupplier, resolve: ChoiceResolver<T> },
}

/// Builder for [`DynamicChoicesParser`]. Obtained from
/// [`parameter::dynamic_choices`](crate::command::parameter::dynamic_choices).
///
/// Exactly one source must be configured before `build`: either
/// [`choices_and_results`](Self::choices_and_results), or
/// [`choices`](Self::choices) together with [`results`](Self::results).
pub struct DynamicChoicesBuilder<T> {
    pairs: Option<PairSupplier<T>>,
    names: Option<NameSupplier>,
    resolve: Option<ChoiceResolver<T>>,
    show_in_usage: bool,
}

impl<T> DynamicChoicesBuilder<T> {
    pub(crate) fn new() -> DynamicChoicesBuilder<T> {
        DynamicChoicesBuilder {
            pairs: None,
            names: None,
            resolve: None,
            show_in_usage: false,
        }
    }

    /// Source the choices and their values from one supplier of pairs.
    pub fn choices_and_results<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Result<Vec<(String, T)>, SupplierError> + Send + Sync + 'static,
    {
        self.pairs = Some(Arc::new(supplier));
        self
    }

    /// Source the choice names from `supplier`. Values come from the
    /// resolver given to [`results`](Self::results).
    pub fn choices<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Result<Vec<String>, SupplierError> + Send + Sync + 'static,
    {
        self.names = Some(Arc::new(supplier));
        self
    }

    /// Resolve a chosen name to its value. Returning `None` rejects the
    /// choice at parse time.
    pub fn results<F>(mut self, resolve: F) -> Self
    where
        F: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        self.resolve = Some(Arc::new(resolve));
        self
    }

    /// Whether usage enumerates the current choices (off by default; the
    /// five-or-fewer rule still applies when enabled).
    pub fn show_in_usage(mut self, show: bool) -> Self {
        self.show_in_usage = show;
        self
    }

    /// Return to the freshly-created state.
    pub fn reset(mut self) -> Self {
        self.pairs = None;
        self.names = None;
        self.resolve = None;
        self.show_in_usage = false;
        self
    }

    /// Finish the parser.
    ///
    /// # Errors
    /// - `MissingChoiceSource` if no source was configured
    /// - `ConflictingChoiceSources` if both forms were configured
    /// - `SplitSourceIncomplete` if only half of the split form was given
    pub fn build(&self) -> Result<DynamicChoicesParser<T>, ConfigError> {
        let split_started = self.names.is_some() || self.resolve.is_some();
        let source = match (&self.pairs, split_started) {
            (Some(_), true) => return Err(ConfigError::ConflictingChoiceSources),
            (None, false) => return Err(ConfigError::MissingChoiceSource),
            (Some(pairs), false) => ChoiceSource::Pairs(Arc::clone(pairs)),
            (None, true) => match (&self.names, &self.resolve) {
                (Some(names), Some(resolve)) => ChoiceSource::Split {
                    names: Arc::clone(names),
                    resolve: Arc::clone(resolve),
                },
                _ => return Err(ConfigError::SplitSourceIncomplete),
            },
        };
        Ok(DynamicChoicesParser {
            source,
            show_in_usage: self.show_in_usage,
        })
    }
}

/// Parses one argument against a choice set supplied fresh for each parse.
pub struct DynamicChoicesParser<T> {
    source: ChoiceSource<T>,
    show_in_usage: bool,
}

impl<T> fmt::Debug for DynamicChoicesParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicChoicesParser")
            .field("show_in_usage", &self.show_in_usage)
            .finish_non_exhaustive()
    }
}

impl<T> DynamicChoicesParser<T> {
    /// One consistent snapshot of the current choice names.
    fn snapshot_names(&self) -> Result<Vec<String>, SupplierError> {
        match &self.source {
            ChoiceSource::Pairs(pairs) => Ok(pairs()?.into_iter().map(|(name, _)| name).collect()),
            ChoiceSource::Split { names, .. } => names(),
        }
    }
}

impl<T> ValueParser<T> for DynamicChoicesParser<T> {
    fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<T, ParseError> {
        let position = reader.position();
        let token = reader.next()?;
        match &self.source {
            ChoiceSource::Pairs(pairs) => {
                let mut snapshot = pairs().map_err(|err| ParseError::supplier_failure(position, err))?;
                match snapshot.iter().position(|(name, _)| name.as_str() == token) {
                    Some(idx) => Ok(snapshot.swap_remove(idx).1),
                    None => {
                        let names: Vec<&str> = snapshot.iter().map(|(name, _)| name.as_str()).collect();
                        Err(ParseError::no_match(position, no_such_choice(token, &names)))
                    },
                }
            },
            ChoiceSource::Split { names, resolve } => {
                let snapshot = names().map_err(|err| ParseError::supplier_failure(position, err))?;
                if !snapshot.iter().any(|name| name.as_str() == token) {
                    let names: Vec<&str> = snapshot.iter().map(String::as_str).collect();
                    return Err(ParseError::no_match(position, no_such_choice(token, &names)));
                }
                resolve(token).ok_or_else(|| {
                    ParseError::no_match(position, format!("'{token}' has no value right now"))
                })
            },
        }
    }

    fn complete(&self, partial: &str, _context: &CommandContext) -> Vec<String> {
        match self.snapshot_names() {
            Ok(names) => names.into_iter().filter(|name| name.starts_with(partial)).collect(),
            Err(err) => {
                warn!("choice supplier failed during completion: {err}");
                Vec::new()
            },
        }
    }

    fn usage(&self, key: &str) -> String {
        match self.snapshot_names() {
            Ok(names) => choices_usage(key, self.show_in_usage, &names),
            Err(err) => {
                warn!("choice supplier failed during usage: {err}");
                format!("<{key}>")
            },
        }
    }
}

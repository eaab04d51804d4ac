//! Cataloged-Type Parameters
//!
//! Resolves one argument to a registry entry. A token containing `:` is
//! looked up directly as a full key; a bare token is tried under the
//! registry's default namespace first, then under each configured prefix in
//! the order they were added. The first hit wins.
use std::sync::Arc;

use log::debug;

use quarry_data::CatalogKey;

use crate::command::ParseError;
use crate::command::args::ArgReader;
use crate::command::context::CommandContext;
use crate::command::parameter::ValueParser;
use crate::registry::CatalogRegistry;

/// Builder for [`CatalogedParser`]. Obtained from
/// [`parameter::cataloged`](crate::command::parameter::cataloged).
pub struct CatalogedBuilder<T> {
    registry: Arc<dyn CatalogRegistry<T>>,
    prefixes: Vec<String>,
}

impl<T> CatalogedBuilder<T> {
    pub(crate) fn new(registry: Arc<dyn CatalogRegistry<T>>) -> CatalogedBuilder<T> {
        CatalogedBuilder {
            registry,
            prefixes: Vec::new(),
        }
    }

    /// Add a namespace to try for bare identifiers, after the default
    /// namespace and any prefixes added earlier.
    pub fn prefix(mut self, namespace: impl Into<String>) -> Self {
        self.prefixes.push(namespace.into());
        self
    }

    /// Add several namespaces to try, in the iterator's order.
    pub fn prefixes<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes.extend(namespaces.into_iter().map(Into::into));
        self
    }

    /// Drop every configured prefix. The registry handle stays.
    pub fn reset(mut self) -> Self {
        self.prefixes.clear();
        self
    }

    /// Finish the parser. Always succeeds: the registry is the only
    /// required piece and it is supplied at construction.
    pub fn build(&self) -> CatalogedParser<T> {
        CatalogedParser {
            registry: Arc::clone(&self.registry),
            prefixes: self.prefixes.clone(),
        }
    }
}

/// Parses one argument into a cataloged value by key lookup.
pub struct CatalogedParser<T> {
    registry: Arc<dyn CatalogRegistry<T>>,
    prefixes: Vec<String>,
}

impl<T> CatalogedParser<T> {
    /// Namespaces consulted for a bare identifier, in resolution order.
    fn search_namespaces(&self) -> Vec<&str> {
        let mut spaces = vec![self.registry.default_namespace()];
        spaces.extend(self.prefixes.iter().map(String::as_str));
        spaces
    }

    fn lookup(&self, key: &CatalogKey, position: usize) -> Result<Option<T>, ParseError> {
        self.registry
            .get(key)
            .map_err(|err| ParseError::lookup_failure(position, err.into()))
    }
}

impl<T> ValueParser<T> for CatalogedParser<T> {
    fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<T, ParseError> {
        let position = reader.position();
        let token = reader.next()?;
        let normalized = token.to_ascii_lowercase();

        if normalized.contains(':') {
            let Ok(key) = CatalogKey::parse(&normalized) else {
                return Err(ParseError::no_match(position, format!("'{token}' is not a valid key")));
            };
            return match self.lookup(&key, position)? {
                Some(value) => {
                    debug!("resolved '{token}' directly as '{key}'");
                    Ok(value)
                },
                None => Err(ParseError::no_match(
                    position,
                    format!("nothing is registered under '{key}'"),
                )),
            };
        }

        for namespace in self.search_namespaces() {
            // a token that cannot form a key under any namespace is a plain miss
            let Ok(key) = CatalogKey::new(namespace, normalized.as_str()) else {
                continue;
            };
            if let Some(value) = self.lookup(&key, position)? {
                debug!("resolved bare '{token}' as '{key}'");
                return Ok(value);
            }
        }
        Err(ParseError::no_match(
            position,
            format!("'{token}' did not match any registered key"),
        ))
    }

    fn complete(&self, partial: &str, _context: &CommandContext) -> Vec<String> {
        let partial = partial.to_ascii_lowercase();
        let mut names: Vec<String> = Vec::new();
        for namespace in self.search_namespaces() {
            for key in self.registry.keys_in(namespace) {
                if key.name().starts_with(&partial) {
                    names.push(key.name().to_string());
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }
}

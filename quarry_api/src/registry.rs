//! Catalog Registries
//!
//! A registry is the host-owned lookup surface for one family of cataloged
//! values (block types, biomes, enchantments, ...). Parsers take a registry
//! handle explicitly; there is no process-global catalog.
use std::collections::HashMap;

use thiserror::Error;

use quarry_data::CatalogKey;

/// A lookup that could not be carried out at all (as opposed to a key that
/// is simply not registered).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lookup of '{key}' failed: {reason}")]
pub struct LookupError {
    pub key: CatalogKey,
    pub reason: String,
}

impl LookupError {
    pub fn new(key: CatalogKey, reason: impl Into<String>) -> LookupError {
        LookupError {
            key,
            reason: reason.into(),
        }
    }
}

/// Host-provided catalog of values of one type, shared with parsers behind
/// an `Arc`. Implementations must tolerate concurrent readers.
pub trait CatalogRegistry<T>: Send + Sync {
    /// The namespace tried first when resolving a bare identifier.
    fn default_namespace(&self) -> &str;

    /// Fetch the value registered under `key`. Absence is `Ok(None)`.
    ///
    /// # Errors
    /// `LookupError` when the lookup itself cannot be performed, for example
    /// because a backing store is unavailable.
    fn get(&self, key: &CatalogKey) -> Result<Option<T>, LookupError>;

    /// Every registered key, in unspecified order.
    fn keys(&self) -> Vec<CatalogKey>;

    /// Registered keys under one namespace.
    fn keys_in(&self, namespace: &str) -> Vec<CatalogKey> {
        self.keys()
            .into_iter()
            .filter(|key| key.namespace() == namespace)
            .collect()
    }
}

/// HashMap-backed registry for hosts with static catalogs, and for tests.
#[derive(Debug, Clone)]
pub struct MemoryRegistry<T> {
    default_namespace: String,
    entries: HashMap<CatalogKey, T>,
}

impl<T> MemoryRegistry<T> {
    pub fn new(default_namespace: impl Into<String>) -> MemoryRegistry<T> {
        MemoryRegistry {
            default_namespace: default_namespace.into(),
            entries: HashMap::new(),
        }
    }

    /// Register `value` under `key`, returning whatever it displaced.
    pub fn insert(&mut self, key: CatalogKey, value: T) -> Option<T> {
        self.entries.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone + Send + Sync> CatalogRegistry<T> for MemoryRegistry<T> {
    fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    fn get(&self, key: &CatalogKey) -> Result<Option<T>, LookupError> {
        Ok(self.entries.get(key).cloned())
    }

    /// Every registered key, sorted so listings and completions are stable.
    fn keys(&self) -> Vec<CatalogKey> {
        let mut keys: Vec<CatalogKey> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

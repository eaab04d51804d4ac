//! Namespaced catalog keys.
//!
//! Every cataloged resource is addressed by a `namespace:name` pair. Both
//! parts are lowercase ASCII; the name part may additionally contain `/` to
//! form path-like identifiers (`quarry:stone/cobbled`).
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error raised when a key or one of its parts fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    MissingSeparator { value: String },
    EmptyPart { part: &'static str },
    TooLong { part: &'static str, len: usize },
    InvalidChar { part: &'static str, ch: char },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::MissingSeparator { value } => {
                write!(f, "missing ':' separator in key '{value}'")
            },
            KeyError::EmptyPart { part } => {
                write!(f, "key {part} is empty")
            },
            KeyError::TooLong { part, len } => {
                write!(f, "key {part} is {len} bytes (limit {})", CatalogKey::MAX_PART_LEN)
            },
            KeyError::InvalidChar { part, ch } => {
                write!(f, "invalid character '{ch}' in key {part}")
            },
        }
    }
}

impl std::error::Error for KeyError {}

/// A validated `namespace:name` identifier for a cataloged resource.
///
/// Keys order by namespace, then by name, so registry listings group by
/// namespace naturally. The serde form is the canonical string.
///
/// ```
/// use quarry_data::CatalogKey;
///
/// let key: CatalogKey = "quarry:stone/cobbled".parse().unwrap();
/// assert_eq!(key.namespace(), "quarry");
/// assert_eq!(key.name(), "stone/cobbled");
/// assert_eq!(key.to_string(), "quarry:stone/cobbled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogKey {
    namespace: String,
    name: String,
}

impl CatalogKey {
    /// Maximum byte length of either part.
    pub const MAX_PART_LEN: usize = 255;

    /// Build a key from already-separated parts, validating both.
    ///
    /// # Errors
    /// Returns a `KeyError` if either part is empty, over the length limit,
    /// or contains a character outside its allowed set.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<CatalogKey, KeyError> {
        let namespace = namespace.into();
        let name = name.into();
        validate_part("namespace", &namespace, false)?;
        validate_part("name", &name, true)?;
        Ok(CatalogKey { namespace, name })
    }

    /// Parse a `namespace:name` string. The first `:` separates the parts.
    ///
    /// # Errors
    /// Returns a `KeyError` if the separator is absent or either part fails
    /// validation.
    pub fn parse(value: &str) -> Result<CatalogKey, KeyError> {
        let Some((namespace, name)) = value.split_once(':') else {
            return Err(KeyError::MissingSeparator {
                value: value.to_string(),
            });
        };
        CatalogKey::new(namespace, name)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_part(part: &'static str, value: &str, allow_slash: bool) -> Result<(), KeyError> {
    if value.is_empty() {
        return Err(KeyError::EmptyPart { part });
    }
    if value.len() > CatalogKey::MAX_PART_LEN {
        return Err(KeyError::TooLong { part, len: value.len() });
    }
    for ch in value.chars() {
        let allowed = ch.is_ascii_lowercase()
            || ch.is_ascii_digit()
            || matches!(ch, '_' | '.' | '-')
            || (allow_slash && ch == '/');
        if !allowed {
            return Err(KeyError::InvalidChar { part, ch });
        }
    }
    Ok(())
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl FromStr for CatalogKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<CatalogKey, KeyError> {
        CatalogKey::parse(s)
    }
}

impl Serialize for CatalogKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CatalogKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<CatalogKey, D::Error> {
        let value = String::deserialize(deserializer)?;
        CatalogKey::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_first_separator() {
        let key = CatalogKey::parse("quarry:dirt").unwrap();
        assert_eq!(key.namespace(), "quarry");
        assert_eq!(key.name(), "dirt");

        // a second ':' lands in the name part and fails its charset
        assert!(matches!(
            CatalogKey::parse("a:b:c"),
            Err(KeyError::InvalidChar { part: "name", ch: ':' })
        ));
    }

    #[test]
    fn bare_values_need_a_separator() {
        assert!(matches!(
            CatalogKey::parse("dirt"),
            Err(KeyError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn empty_parts_are_rejected() {
        assert!(matches!(
            CatalogKey::parse(":dirt"),
            Err(KeyError::EmptyPart { part: "namespace" })
        ));
        assert!(matches!(
            CatalogKey::parse("quarry:"),
            Err(KeyError::EmptyPart { part: "name" })
        ));
    }

    #[test]
    fn charsets_differ_between_parts() {
        assert!(CatalogKey::new("quarry", "stone/cobbled").is_ok());
        assert!(matches!(
            CatalogKey::new("qua/rry", "stone"),
            Err(KeyError::InvalidChar {
                part: "namespace",
                ch: '/'
            })
        ));
        assert!(matches!(
            CatalogKey::new("Quarry", "stone"),
            Err(KeyError::InvalidChar {
                part: "namespace",
                ch: 'Q'
            })
        ));
        assert!(matches!(
            CatalogKey::new("quarry", "stone brick"),
            Err(KeyError::InvalidChar { part: "name", ch: ' ' })
        ));
    }

    #[test]
    fn oversized_parts_are_rejected() {
        let long = "a".repeat(CatalogKey::MAX_PART_LEN + 1);
        assert!(matches!(
            CatalogKey::new("quarry", long),
            Err(KeyError::TooLong { part: "name", len: 256 })
        ));
    }

    #[test]
    fn serde_uses_the_string_form() {
        let key = CatalogKey::parse("quarry:oak_log").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"quarry:oak_log\"");

        let back: CatalogKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        let bad: Result<CatalogKey, _> = serde_json::from_str("\"not a key\"");
        assert!(bad.is_err());
    }

    #[test]
    fn keys_order_by_namespace_then_name() {
        let mut keys = vec![
            CatalogKey::parse("zeta:apple").unwrap(),
            CatalogKey::parse("alpha:zebra").unwrap(),
            CatalogKey::parse("alpha:apple").unwrap(),
        ];
        keys.sort();
        let display: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(display, vec!["alpha:apple", "alpha:zebra", "zeta:apple"]);
    }
}

//! Text values.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A piece of display text, as produced by a text serializer.
///
/// The model keeps only the flattened content; styling is a host concern and
/// rides along inside whatever representation the host's serializer emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text(String);

impl Text {
    /// Wrap plain, unstyled content.
    pub fn plain(content: impl Into<String>) -> Text {
        Text(content.into())
    }

    pub fn content(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Text {
        Text(content.to_string())
    }
}

impl From<String> for Text {
    fn from(content: String) -> Text {
        Text(content)
    }
}

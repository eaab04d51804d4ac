//! Command Context
//!
//! Everything a value parser may consult besides the raw arguments: who is
//! invoking the command, and values parsed by earlier parameters on the line.
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use variantly::Variantly;

/// The identity a command is running as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CommandCaller {
    Console,
    Player { id: Uuid, name: String },
    Plugin { name: String },
}

impl CommandCaller {
    /// The player's identity, if the caller is one.
    pub fn player_id(&self) -> Option<Uuid> {
        match self {
            CommandCaller::Player { id, .. } => Some(*id),
            CommandCaller::Console | CommandCaller::Plugin { .. } => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CommandCaller::Console => "console",
            CommandCaller::Player { name, .. } | CommandCaller::Plugin { name } => name,
        }
    }
}

/// Per-invocation parse state: the caller plus a typed map of the values
/// parsed so far, keyed by parameter name.
pub struct CommandContext {
    caller: CommandCaller,
    parsed: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl CommandContext {
    pub fn new(caller: CommandCaller) -> CommandContext {
        CommandContext {
            caller,
            parsed: HashMap::new(),
        }
    }

    pub fn caller(&self) -> &CommandCaller {
        &self.caller
    }

    /// Record a parsed value under a parameter name, replacing any earlier
    /// value for that name.
    pub fn put(&mut self, key: impl Into<String>, value: impl Any + Send + Sync) {
        self.parsed.insert(key.into(), Box::new(value));
    }

    /// Fetch an earlier parsed value, typed. Returns `None` when the key is
    /// absent or holds a different type.
    pub fn parsed<V: Any>(&self, key: &str) -> Option<&V> {
        self.parsed.get(key).and_then(|value| value.downcast_ref::<V>())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.parsed.contains_key(key)
    }
}

impl fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.parsed.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("CommandContext")
            .field("caller", &self.caller)
            .field("parsed", &keys)
            .finish()
    }
}

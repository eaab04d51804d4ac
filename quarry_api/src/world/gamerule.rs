//! Game Rules
//!
//! Per-world switches and knobs, keyed by UPPER_SNAKE_CASE names. The
//! registry holds each rule's descriptor: its name and the typed default a
//! world starts from. [`GameRuleRegistry::vanilla`] seeds the full vanilla
//! catalog; hosts add their own rules on top.
use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use variantly::Variantly;

use quarry_data::Ticks;

/// Problems raised while describing or registering rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameRuleError {
    #[error("'{name}' is not an UPPER_SNAKE_CASE rule name")]
    InvalidName { name: String },
    #[error("a rule named '{name}' is already registered")]
    Duplicate { name: String },
}

/// The typed value a game rule carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Variantly)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum GameRuleValue {
    Boolean(bool),
    Integer(i64),
    Duration(Ticks),
}

/// Descriptor of one game rule: its symbolic name and typed default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRule {
    name: String,
    default: GameRuleValue,
}

impl GameRule {
    /// Describe a rule, validating the name.
    ///
    /// # Errors
    /// `GameRuleError::InvalidName` unless the name is UPPER_SNAKE_CASE: an
    /// uppercase ASCII letter followed by uppercase letters, digits and `_`.
    pub fn new(name: impl Into<String>, default: GameRuleValue) -> Result<GameRule, GameRuleError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_head = chars.next().is_some_and(|ch| ch.is_ascii_uppercase());
        let valid_tail = chars.all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_');
        if !(valid_head && valid_tail) {
            return Err(GameRuleError::InvalidName { name });
        }
        Ok(GameRule { name, default })
    }

    /// Describe a boolean-valued rule.
    ///
    /// # Errors
    /// As [`GameRule::new`].
    pub fn boolean(name: impl Into<String>, default: bool) -> Result<GameRule, GameRuleError> {
        GameRule::new(name, GameRuleValue::Boolean(default))
    }

    /// Describe an integer-valued rule.
    ///
    /// # Errors
    /// As [`GameRule::new`].
    pub fn integer(name: impl Into<String>, default: i64) -> Result<GameRule, GameRuleError> {
        GameRule::new(name, GameRuleValue::Integer(default))
    }

    /// Describe a duration-valued rule.
    ///
    /// # Errors
    /// As [`GameRule::new`].
    pub fn duration(name: impl Into<String>, default: Ticks) -> Result<GameRule, GameRuleError> {
        GameRule::new(name, GameRuleValue::Duration(default))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> GameRuleValue {
        self.default
    }
}

/// The known rules of one host, name-keyed. Iteration is name-ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRuleRegistry {
    rules: BTreeMap<String, GameRule>,
}

impl GameRuleRegistry {
    /// An empty registry. Most hosts start from [`vanilla`](Self::vanilla).
    pub fn new() -> GameRuleRegistry {
        GameRuleRegistry::default()
    }

    /// The full vanilla rule catalog with its default values.
    pub fn vanilla() -> GameRuleRegistry {
        VANILLA_RULES.clone()
    }

    /// Add a rule.
    ///
    /// # Errors
    /// `GameRuleError::Duplicate` if a rule with the same name exists.
    pub fn register(&mut self, rule: GameRule) -> Result<(), GameRuleError> {
        if self.rules.contains_key(&rule.name) {
            return Err(GameRuleError::Duplicate { name: rule.name });
        }
        self.rules.insert(rule.name.clone(), rule);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GameRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Every registered rule, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &GameRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Build a vanilla descriptor directly. Only the static table below uses
/// this; names there are known-valid (a test keeps that true).
fn vanilla_rule(name: &str, default: GameRuleValue) -> GameRule {
    GameRule {
        name: name.to_string(),
        default,
    }
}

lazy_static! {
    /// The vanilla catalog, built once and cloned out by `vanilla()`.
    static ref VANILLA_RULES: GameRuleRegistry = {
        use GameRuleValue::{Boolean, Duration, Integer};

        let table = [
            ("ANNOUNCE_ADVANCEMENTS", Boolean(true)),
            ("COMMAND_BLOCK_OUTPUT", Boolean(true)),
            ("DISABLE_ELYTRA_MOVEMENT_CHECK", Boolean(false)),
            ("DISABLE_RAIDS", Boolean(false)),
            ("DO_DAYLIGHT_CYCLE", Boolean(true)),
            ("DO_ENTITY_DROPS", Boolean(true)),
            ("DO_FIRE_UPDATES", Boolean(true)),
            ("DO_LIMITED_CRAFTING", Boolean(false)),
            ("DO_MOB_LOOT", Boolean(true)),
            ("DO_MOB_SPAWNING", Boolean(true)),
            ("DO_TILE_DROPS", Boolean(true)),
            ("DO_WEATHER_CYCLE", Boolean(true)),
            ("KEEP_INVENTORY", Boolean(false)),
            ("LOG_ADMIN_COMMANDS", Boolean(true)),
            ("MAX_COMMAND_CHAIN_LENGTH", Integer(65536)),
            ("MAX_ENTITY_CRAMMING", Integer(24)),
            ("MOB_GRIEFING", Boolean(true)),
            ("NATURAL_REGENERATION", Boolean(true)),
            ("RANDOM_BLOCK_UPDATE_SPEED", Duration(Ticks(3))),
            ("REDUCED_DEBUG_INFO", Boolean(false)),
            ("SEND_COMMAND_FEEDBACK", Boolean(true)),
            ("SHOW_DEATH_MESSAGES", Boolean(true)),
            ("SPAWN_RADIUS", Integer(10)),
            ("SPECTATORS_GENERATE_CHUNKS", Boolean(true)),
        ];

        let mut rules = BTreeMap::new();
        for (name, default) in table {
            rules.insert(name.to_string(), vanilla_rule(name, default));
        }
        GameRuleRegistry { rules }
    };
}

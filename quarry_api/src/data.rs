//! Entity Data Flags
//!
//! Boolean switches on an entity's state. Each flag has the default vanilla
//! gives a freshly spawned entity; hosts store only the overrides and answer
//! [`EntityDataHolder::flag`] for the rest.
use serde::{Deserialize, Serialize};

use crate::command::parameter::NamedVariants;

/// The boolean switches an entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityFlag {
    /// A persisting entity never despawns naturally, even with no player
    /// nearby.
    Persisting,
    /// An invulnerable entity takes no damage from ordinary sources.
    Invulnerable,
    /// A glowing entity is outlined through walls.
    Glowing,
    /// A silent entity makes no sounds.
    Silent,
    /// Whether gravity applies to the entity.
    Gravity,
}

impl EntityFlag {
    /// The value vanilla gives a freshly spawned entity.
    pub fn vanilla_default(self) -> bool {
        match self {
            EntityFlag::Gravity => true,
            EntityFlag::Persisting | EntityFlag::Invulnerable | EntityFlag::Glowing | EntityFlag::Silent => false,
        }
    }
}

impl NamedVariants for EntityFlag {
    const VARIANTS: &'static [EntityFlag] = &[
        EntityFlag::Persisting,
        EntityFlag::Invulnerable,
        EntityFlag::Glowing,
        EntityFlag::Silent,
        EntityFlag::Gravity,
    ];

    fn name(&self) -> &'static str {
        match self {
            EntityFlag::Persisting => "persisting",
            EntityFlag::Invulnerable => "invulnerable",
            EntityFlag::Glowing => "glowing",
            EntityFlag::Silent => "silent",
            EntityFlag::Gravity => "gravity",
        }
    }
}

/// Anything that carries entity flags. Implemented by host entity handles.
pub trait EntityDataHolder {
    /// The current value of `flag`.
    fn flag(&self, flag: EntityFlag) -> bool;

    /// Set `flag` to `value`.
    fn set_flag(&mut self, flag: EntityFlag, value: bool);

    /// Whether the entity is protected from natural despawning.
    fn persists(&self) -> bool {
        self.flag(EntityFlag::Persisting)
    }
}

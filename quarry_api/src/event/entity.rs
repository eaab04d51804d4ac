//! Entity Events
//!
//! Mount and dismount records. Instead of one event type per source kind,
//! each record carries an [`EntitySource`] whose [`SourceKind`] says how
//! specific the source is; the predicates on `SourceKind` collapse the
//! kind hierarchy (every player is a human, every human is living).
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use variantly::Variantly;

/// How much is known about the entity behind an [`EntitySource`].
///
/// Kinds nest, `Player` being the most specific and `Entity` the least.
/// A host reports the most specific kind it knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    Entity,
    Living,
    Human,
    Player,
}

impl SourceKind {
    /// Whether this kind is at least a living entity.
    pub fn is_living(self) -> bool {
        matches!(self, SourceKind::Living | SourceKind::Human | SourceKind::Player)
    }

    /// Whether this kind is at least a human.
    pub fn is_human(self) -> bool {
        matches!(self, SourceKind::Human | SourceKind::Player)
    }

    pub fn is_player(self) -> bool {
        matches!(self, SourceKind::Player)
    }
}

/// The entity that caused an event, with the most specific kind known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySource {
    pub entity: Uuid,
    pub kind: SourceKind,
}

impl EntitySource {
    pub fn new(entity: Uuid, kind: SourceKind) -> EntitySource {
        EntitySource { entity, kind }
    }

    /// Convenience for the commonest source: a player.
    pub fn player(entity: Uuid) -> EntitySource {
        EntitySource::new(entity, SourceKind::Player)
    }
}

/// An entity began riding another.
///
/// `target` is the entity being mounted: a player climbing onto a horse
/// yields the player as source and the horse as target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountEvent {
    pub source: EntitySource,
    pub target: Uuid,
}

/// An entity stopped riding another.
///
/// `target` is the entity being dismounted from, mirroring [`MountEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismountEvent {
    pub source: EntitySource,
    pub target: Uuid,
}

/// Umbrella over the entity events, for hosts with a single event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Variantly)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntityEvent {
    Mount(MountEvent),
    Dismount(DismountEvent),
}

impl EntityEvent {
    /// The source common to every entity event.
    pub fn source(&self) -> EntitySource {
        match self {
            EntityEvent::Mount(event) => event.source,
            EntityEvent::Dismount(event) => event.source,
        }
    }

    /// The entity acted upon.
    pub fn target(&self) -> Uuid {
        match self {
            EntityEvent::Mount(event) => event.target,
            EntityEvent::Dismount(event) => event.target,
        }
    }
}

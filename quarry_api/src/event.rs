//! Event Module
//!
//! Plain records describing things that happened in the world. The host
//! constructs them and hands them to whatever event channel it runs; plugins
//! match on the records. Events carry entity identities, not entity handles,
//! so they stay cheap to clone and to serialize.

pub mod entity;

pub use entity::{DismountEvent, EntityEvent, EntitySource, MountEvent, SourceKind};

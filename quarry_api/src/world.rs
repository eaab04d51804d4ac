//! World Module
//!
//! Per-world contracts and the data they trade in: typed game rules with the
//! vanilla catalog, weather state, and read-only biome volume views.

pub mod gamerule;
pub mod volume;
pub mod weather;

pub use gamerule::{GameRule, GameRuleError, GameRuleRegistry, GameRuleValue};
pub use volume::{BiomeVolume, BiomeVolumeMut, UnmodifiableBiomeVolume};
pub use weather::{Weather, WeatherUniverse};

//! Tick Time
//!
//! Game time is counted in ticks. A healthy server runs at [`TICKS_PER_SECOND`],
//! one tick every 50 ms; an overloaded one takes longer per tick, which is why
//! conversions go through an observed tick duration rather than a constant.
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tick rate of an unloaded server.
pub const TICKS_PER_SECOND: u64 = 20;

/// Duration of one tick on an unloaded server.
pub const OPTIMAL_TICK_DURATION: Duration = Duration::from_millis(50);

/// A count of game ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticks(pub u64);

impl Ticks {
    pub const ZERO: Ticks = Ticks(0);

    /// Convert a wall-clock duration into ticks at the given tick duration,
    /// rounding to the nearest tick on millisecond arithmetic.
    ///
    /// Sub-millisecond tick durations are treated as one millisecond.
    pub fn from_duration(duration: Duration, tick_duration: Duration) -> Ticks {
        let tick_ms = tick_duration.as_millis().max(1);
        let ticks = (duration.as_millis() + tick_ms / 2) / tick_ms;
        Ticks(u64::try_from(ticks).unwrap_or(u64::MAX))
    }

    /// Convert this tick count into wall-clock time at the given tick
    /// duration. Saturates instead of overflowing.
    pub fn to_duration(self, tick_duration: Duration) -> Duration {
        let tick_ms = u64::try_from(tick_duration.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(tick_ms.saturating_mul(self.0))
    }

    /// Add two tick counts, saturating at the maximum.
    pub fn saturating_add(self, other: Ticks) -> Ticks {
        Ticks(self.0.saturating_add(other.0))
    }
}

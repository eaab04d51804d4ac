//! Shared data model for the Quarry plugin API.

pub mod key;
pub mod pos;
pub mod text;
pub mod tick;

pub use key::{CatalogKey, KeyError};
pub use pos::BlockPos;
pub use text::Text;
pub use tick::{OPTIMAL_TICK_DURATION, TICKS_PER_SECOND, Ticks};

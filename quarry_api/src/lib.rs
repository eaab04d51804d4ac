#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data;
pub mod engine;
pub mod event;
pub mod health;
pub mod network;
pub mod registry;
pub mod world;

// Re-exports for convenience
pub use command::args::ArgReader;
pub use command::context::{CommandCaller, CommandContext};
pub use command::parameter::ValueParser;
pub use command::{ParseError, ParseErrorKind};
pub use engine::{Engine, Scheduler, Task};
pub use quarry_data::{BlockPos, CatalogKey, Text, Ticks};
pub use registry::{CatalogRegistry, MemoryRegistry};

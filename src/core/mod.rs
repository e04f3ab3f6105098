// Core logic: configuration, shared context, entries and their loading

pub mod api;
pub mod config;
pub mod context;
pub mod distributions;
pub mod entries;
pub mod environment;
pub mod loader;
pub mod processes;

// Re-export commonly used items
pub use config::{Configuration, DefaultStrings, Settings};
pub use context::Context;
pub use distributions::{Distributions, OsRelease};
pub use entries::{Entry, EntryKind, EntryRequest};
pub use environment::Environment;

//! # ladle-store
//!
//! Persistence adapters for the recipe collection: a JSON-file store for
//! real use and an in-memory store for tests and no-durability callers.
//!
//! Both apply the load-time self-healing rules in [`heal`]: usage counters
//! are re-derived from the cooking history before records are handed out.
//! Derived ratings are *not* recomputed here — that requires the rating
//! engine and is done unconditionally by the lifecycle coordinator.

pub mod heal;
pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

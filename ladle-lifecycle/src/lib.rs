//! # ladle-lifecycle
//!
//! The lifecycle coordinator: every externally visible action on a recipe
//! routes through [`LifecycleCoordinator`], which guarantees derived
//! ratings are recomputed before anything is persisted or returned.

pub mod coordinator;

pub use coordinator::LifecycleCoordinator;

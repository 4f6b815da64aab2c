//! # ladle-rating
//!
//! Pure rating computation: four additively combined, independently capped
//! usage factors produce the auto rating; a fixed 70/30 blend of manual
//! and auto produces the displayed final rating.
//!
//! Every divergent hand-written copy of this formula elsewhere in a caller
//! is a bug; this crate is the single source of truth, invoked through the
//! lifecycle coordinator.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::RatingEngine;
pub use formula::RatingBreakdown;

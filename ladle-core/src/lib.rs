//! # ladle-core
//!
//! Foundation crate for the Ladle recipe system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod recipe;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LadleConfig;
pub use errors::{LadleError, LadleResult};
pub use recipe::{Difficulty, NewRecipe, Rating, RecipeEdit, RecipeFilter, RecipeRecord};

//! Error taxonomy for the Ladle workspace.
//!
//! Per-concern errors live in their own files and are aggregated into
//! [`LadleError`], which every fallible public API returns.

pub mod store_error;
pub mod validation_error;

pub use store_error::StoreError;
pub use validation_error::{FieldIssue, ValidationError};

/// Aggregate error type for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum LadleError {
    /// Unknown recipe id passed to a read or mutation.
    #[error("recipe not found: {id}")]
    RecipeNotFound { id: String },

    /// Structurally invalid input to `create`, `edit`, or `set_manual_rating`.
    /// Reported to the caller, never retried.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Load/save failure in the persistence adapter. The in-memory session
    /// keeps operating; durability is degraded until the next successful save.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// JSON (de)serialization failure crossing the persistence boundary.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration (bad TOML, unusable store path).
    #[error("config error: {0}")]
    Config(String),
}

/// Workspace-wide result alias.
pub type LadleResult<T> = Result<T, LadleError>;

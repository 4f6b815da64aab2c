use crate::errors::LadleResult;
use crate::recipe::RecipeRecord;

/// Persistence adapter for the record collection.
///
/// Implementations own the wire format and must hand back structurally
/// healed records on load (usage counters re-derived from the history).
/// Derived ratings are recomputed by the caller — stored values are never
/// trusted as-is.
pub trait IRecipeStore: Send + Sync {
    /// Load the full collection. A missing backing file is an empty
    /// collection, not an error.
    fn load(&self) -> LadleResult<Vec<RecipeRecord>>;

    /// Persist the full collection atomically.
    fn save(&self, records: &[RecipeRecord]) -> LadleResult<()>;
}

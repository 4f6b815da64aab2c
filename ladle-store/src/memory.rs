use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use ladle_core::errors::StoreError;
use ladle_core::traits::IRecipeStore;
use ladle_core::{LadleResult, RecipeRecord};

use crate::heal;

/// In-memory store: same trait, no durability. Used in tests and by
/// callers that want a purely ephemeral session.
///
/// `fail_saves` lets tests exercise the coordinator's save-failure path
/// without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<RecipeRecord>>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial collection.
    pub fn with_records(records: Vec<RecipeRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `save` fail with a `StoreError`.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of save calls that have been accepted.
    pub fn record_count(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl IRecipeStore for MemoryStore {
    fn load(&self) -> LadleResult<Vec<RecipeRecord>> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?
            .clone();
        heal::repair_all(&mut records);
        Ok(records)
    }

    fn save(&self, records: &[RecipeRecord]) -> LadleResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::SaveFailed {
                reason: "simulated save failure".to_string(),
            }
            .into());
        }
        let mut guard = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        *guard = records.to_vec();
        Ok(())
    }
}

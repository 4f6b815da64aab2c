use std::sync::Arc;

use dashmap::DashMap;

use ladle_core::errors::LadleError;
use ladle_core::traits::{IClock, IRatingEngine, IRecipeStore, SystemClock};
use ladle_core::{LadleConfig, LadleResult, NewRecipe, RecipeEdit, RecipeFilter, RecipeRecord};
use ladle_rating::RatingEngine;
use ladle_store::JsonStore;

/// The single choke point for every recipe mutation.
///
/// Owns the in-memory collection, the rating engine, the persistence
/// adapter, and the clock. Each mutation applies exactly one record
/// operation under that record's map entry lock (serializing rapid
/// mutations on the same id), and only fully recomputed records are ever
/// handed to the store or the caller.
///
/// A failed save never corrupts the in-memory state: the mutated record is
/// fully recomputed and remains the live version, the error is surfaced,
/// and durability is degraded until the next successful save.
pub struct LifecycleCoordinator {
    records: DashMap<String, RecipeRecord>,
    store: Arc<dyn IRecipeStore>,
    engine: Arc<dyn IRatingEngine>,
    clock: Arc<dyn IClock>,
}

impl LifecycleCoordinator {
    /// Build a coordinator over explicit collaborators, loading and
    /// self-healing the stored collection.
    ///
    /// Every loaded record gets both derived ratings recomputed before any
    /// mutation is admitted — persisted derived fields may come from an
    /// older formula version and are never trusted.
    pub fn new(
        store: Arc<dyn IRecipeStore>,
        engine: Arc<dyn IRatingEngine>,
        clock: Arc<dyn IClock>,
    ) -> LadleResult<Self> {
        let now = clock.now();
        let records = DashMap::new();
        for mut record in store.load()? {
            record.refresh_ratings(engine.as_ref(), now);
            records.insert(record.id.clone(), record);
        }
        tracing::info!(count = records.len(), "recipe collection loaded");
        Ok(Self {
            records,
            store,
            engine,
            clock,
        })
    }

    /// Convenience constructor: JSON store at the configured path, the
    /// standard rating engine, and the wall clock.
    pub fn open(config: &LadleConfig) -> LadleResult<Self> {
        let store = JsonStore::open(config.store.path.clone());
        let store: Arc<dyn IRecipeStore> = if config.store.pretty {
            Arc::new(store)
        } else {
            Arc::new(store.compact())
        };
        Self::new(store, Arc::new(RatingEngine::new()), Arc::new(SystemClock))
    }

    // --- Reads ---

    /// Fetch a record by id.
    pub fn get(&self, id: &str) -> LadleResult<RecipeRecord> {
        self.records
            .get(id)
            .map(|r| r.value().clone())
            .ok_or_else(|| LadleError::RecipeNotFound { id: id.to_string() })
    }

    /// List records matching the filter, ordered by creation time.
    pub fn list(&self, filter: &RecipeFilter) -> Vec<RecipeRecord> {
        let mut records: Vec<RecipeRecord> = self
            .records
            .iter()
            .filter(|r| filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // --- Mutations ---

    /// Validate and add a new recipe. Nothing is inserted when validation
    /// fails.
    pub fn create(&self, new: NewRecipe) -> LadleResult<RecipeRecord> {
        let record = RecipeRecord::create(new, self.engine.as_ref(), self.clock.now())?;
        tracing::info!(recipe_id = %record.id, title = %record.title, "recipe created");
        self.records.insert(record.id.clone(), record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Record a cook at the current time.
    pub fn mark_cooked(&self, id: &str) -> LadleResult<RecipeRecord> {
        let now = self.clock.now();
        self.apply(id, |record, engine| {
            record.mark_cooked(engine, now);
            Ok(())
        })
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&self, id: &str) -> LadleResult<RecipeRecord> {
        let now = self.clock.now();
        self.apply(id, |record, engine| {
            record.toggle_favorite(engine, now);
            Ok(())
        })
    }

    /// Set the user-supplied rating.
    pub fn set_manual_rating(&self, id: &str, rating: u8) -> LadleResult<RecipeRecord> {
        self.apply(id, |record, engine| record.set_manual_rating(rating, engine))
    }

    /// Apply a descriptive-only edit.
    pub fn edit(&self, id: &str, edit: RecipeEdit) -> LadleResult<RecipeRecord> {
        self.apply(id, |record, _engine| record.edit(edit))
    }

    /// Drop a record from the collection. No record state survives.
    pub fn delete(&self, id: &str) -> LadleResult<RecipeRecord> {
        let (_, removed) = self
            .records
            .remove(id)
            .ok_or_else(|| LadleError::RecipeNotFound { id: id.to_string() })?;
        tracing::info!(recipe_id = %id, "recipe deleted");
        self.persist()?;
        Ok(removed)
    }

    // --- Internals ---

    /// The choke point: load the record (else `RecipeNotFound`), run
    /// exactly one operation under the entry lock, then persist. The
    /// operation itself recomputes derived fields, so persistence never
    /// observes counters that moved without their ratings.
    fn apply<F>(&self, id: &str, op: F) -> LadleResult<RecipeRecord>
    where
        F: FnOnce(&mut RecipeRecord, &dyn IRatingEngine) -> LadleResult<()>,
    {
        let updated = {
            let mut entry = self
                .records
                .get_mut(id)
                .ok_or_else(|| LadleError::RecipeNotFound { id: id.to_string() })?;
            op(entry.value_mut(), self.engine.as_ref())?;
            entry.value().clone()
        };
        self.persist()?;
        Ok(updated)
    }

    /// Persist a snapshot of the whole collection, ordered by creation
    /// time for stable output.
    fn persist(&self) -> LadleResult<()> {
        let mut snapshot: Vec<RecipeRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        snapshot.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        if let Err(e) = self.store.save(&snapshot) {
            tracing::warn!(error = %e, "save failed; serving last valid in-memory state");
            return Err(e);
        }
        Ok(())
    }
}

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LadleResult;
use crate::traits::IRatingEngine;

use super::input::{NewRecipe, RecipeEdit};
use super::rating::Rating;
use super::Difficulty;

/// The recipe entity. Canonical fields are mutated only through the
/// operations below; the derived fields `auto_rating` and `final_rating`
/// are always outputs of the rating engine, never assigned from user input.
///
/// Serialized with the canonical camelCase persisted shape. Derived and
/// usage fields carry `#[serde(default)]` so payloads written by older
/// schema versions still deserialize; they are healed and recomputed on
/// load rather than trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// UUID v4 identifier. Stable for the life of the record.
    pub id: String,
    pub title: String,
    /// Ordered, non-empty.
    pub ingredients: Vec<String>,
    /// Ordered, non-empty.
    pub steps: Vec<String>,
    /// Preparation time in minutes, > 0.
    #[serde(rename = "time")]
    pub time_minutes: u32,
    /// Servings, >= 1.
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub favorite: bool,
    /// User-supplied rating. Changed only by an explicit rating action.
    #[serde(default = "default_manual_rating")]
    pub manual_rating: Rating,
    /// Derived from usage signals. Never set directly.
    #[serde(default)]
    pub auto_rating: Rating,
    /// 70/30 manual/auto blend. Never set directly.
    #[serde(default)]
    pub final_rating: Rating,
    /// Immutable after creation.
    pub created_at: DateTime<Utc>,
    /// Equals `max(cooking_history)` when the history is non-empty.
    #[serde(default)]
    pub last_cooked_at: Option<DateTime<Utc>>,
    /// Equals `cooking_history.len()`.
    #[serde(default)]
    pub times_cooked: u32,
    /// Append-only log of cook timestamps, in call order.
    #[serde(default)]
    pub cooking_history: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
}

fn default_manual_rating() -> Rating {
    Rating::DEFAULT_MANUAL
}

impl RecipeRecord {
    /// Create a record from validated input, seeding usage counters to
    /// zero/empty and computing both derived ratings from the seed state.
    pub fn create(
        new: NewRecipe,
        engine: &dyn IRatingEngine,
        now: DateTime<Utc>,
    ) -> LadleResult<Self> {
        new.validate()?;

        let manual_rating = match new.manual_rating {
            Some(raw) => Rating::try_new(raw)?,
            None => Rating::DEFAULT_MANUAL,
        };

        let mut record = Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            ingredients: new.ingredients,
            steps: new.steps,
            time_minutes: new.time_minutes,
            servings: new.servings,
            difficulty: new.difficulty,
            categories: new.categories,
            favorite: false,
            manual_rating,
            auto_rating: Rating::MIN,
            final_rating: Rating::MIN,
            created_at: now,
            last_cooked_at: None,
            times_cooked: 0,
            cooking_history: Vec::new(),
            notes: new.notes,
        };
        record.refresh_ratings(engine, now);
        Ok(record)
    }

    /// Record a cook at `now`: append to the history in call order (no
    /// re-sorting), bump the counter, advance `last_cooked_at`, and
    /// recompute both derived ratings.
    pub fn mark_cooked(&mut self, engine: &dyn IRatingEngine, now: DateTime<Utc>) {
        self.cooking_history.push(now);
        self.times_cooked += 1;
        // max() keeps last_cooked_at consistent with the history even when
        // an out-of-order timestamp is appended.
        self.last_cooked_at = Some(match self.last_cooked_at {
            Some(last) => last.max(now),
            None => now,
        });
        self.refresh_ratings(engine, now);
    }

    /// Flip the favorite flag. Favorite status feeds the auto rating, so
    /// both derived ratings are recomputed immediately.
    pub fn toggle_favorite(&mut self, engine: &dyn IRatingEngine, now: DateTime<Utc>) {
        self.favorite = !self.favorite;
        self.refresh_ratings(engine, now);
    }

    /// Set the user-supplied rating. Only the final blend is recomputed;
    /// the auto rating does not depend on the manual rating.
    pub fn set_manual_rating(&mut self, raw: u8, engine: &dyn IRatingEngine) -> LadleResult<()> {
        let rating = Rating::try_new(raw)?;
        self.manual_rating = rating;
        self.final_rating = engine.final_rating(self.manual_rating, self.auto_rating);
        Ok(())
    }

    /// Apply a descriptive-only edit. Rating and usage fields are never
    /// touched and no recomputation is triggered.
    pub fn edit(&mut self, edit: RecipeEdit) -> LadleResult<()> {
        edit.validate()?;

        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(ingredients) = edit.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(steps) = edit.steps {
            self.steps = steps;
        }
        if let Some(time_minutes) = edit.time_minutes {
            self.time_minutes = time_minutes;
        }
        if let Some(servings) = edit.servings {
            self.servings = servings;
        }
        if let Some(difficulty) = edit.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(categories) = edit.categories {
            self.categories = categories;
        }
        if let Some(notes) = edit.notes {
            self.notes = notes;
        }
        Ok(())
    }

    /// Recompute both derived ratings from the current canonical fields.
    ///
    /// Called by every mutation that changes a rating input, and
    /// unconditionally on load — persisted derived fields are never
    /// trusted, since they may originate from an older formula version
    /// or a partially applied mutation.
    pub fn refresh_ratings(&mut self, engine: &dyn IRatingEngine, now: DateTime<Utc>) {
        self.auto_rating = engine.auto_rating(self, now);
        self.final_rating = engine.final_rating(self.manual_rating, self.auto_rating);
    }

    /// Re-derive `times_cooked` and `last_cooked_at` from the history.
    /// Load-time self-healing for records stored by older schema versions
    /// or torn writes.
    pub fn repair_usage_fields(&mut self) {
        self.times_cooked = self.cooking_history.len() as u32;
        self.last_cooked_at = self.cooking_history.iter().max().copied();
    }

    /// Whether this record has ever been cooked. Derived, not a state
    /// transition.
    pub fn ever_cooked(&self) -> bool {
        self.times_cooked > 0
    }
}

/// Identity equality: two records are equal if they have the same id.
/// For field-by-field comparison, compare the fields directly.
impl PartialEq for RecipeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecipeRecord {}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::traits::IRatingEngine;

    use super::*;

    /// Minimal engine: auto rating pinned, blend per the 70/30 formula.
    struct PinnedEngine(u8);

    impl IRatingEngine for PinnedEngine {
        fn auto_rating(&self, _record: &RecipeRecord, _now: DateTime<Utc>) -> Rating {
            Rating::new(self.0)
        }

        fn final_rating(&self, manual: Rating, auto: Rating) -> Rating {
            Rating::from_raw_score(0.7 * f64::from(manual) + 0.3 * f64::from(auto))
        }
    }

    fn new_recipe() -> NewRecipe {
        NewRecipe {
            title: "Shakshuka".into(),
            ingredients: vec!["eggs".into(), "tomatoes".into()],
            steps: vec!["simmer sauce".into(), "poach eggs".into()],
            time_minutes: 30,
            servings: 2,
            difficulty: Difficulty::Easy,
            categories: BTreeSet::from(["breakfast".to_string()]),
            notes: String::new(),
            manual_rating: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn create_seeds_counters_and_derived_fields() {
        let engine = PinnedEngine(1);
        let record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();

        assert_eq!(record.times_cooked, 0);
        assert!(record.cooking_history.is_empty());
        assert!(record.last_cooked_at.is_none());
        assert_eq!(record.manual_rating, Rating::DEFAULT_MANUAL);
        assert_eq!(record.auto_rating, Rating::MIN);
        // round(0.7*3 + 0.3*1) = round(2.4) = 2
        assert_eq!(record.final_rating.value(), 2);
    }

    #[test]
    fn create_rejects_invalid_input() {
        let engine = PinnedEngine(1);
        let mut bad = new_recipe();
        bad.ingredients.clear();
        bad.time_minutes = 0;

        let err = RecipeRecord::create(bad, &engine, now()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ingredients"), "missing field name: {msg}");
        assert!(msg.contains("time"), "missing field name: {msg}");
    }

    #[test]
    fn mark_cooked_appends_in_call_order() {
        let engine = PinnedEngine(1);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();

        let later = now() + chrono::Duration::days(2);
        let earlier = now() + chrono::Duration::days(1);
        record.mark_cooked(&engine, later);
        record.mark_cooked(&engine, earlier);

        // Out-of-order timestamps are appended, not re-sorted.
        assert_eq!(record.cooking_history, vec![later, earlier]);
        assert_eq!(record.times_cooked, 2);
        // last_cooked_at tracks the max of the history.
        assert_eq!(record.last_cooked_at, Some(later));
    }

    #[test]
    fn toggle_favorite_twice_restores_ratings() {
        let engine = PinnedEngine(2);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();
        let before = (record.favorite, record.auto_rating, record.final_rating);

        record.toggle_favorite(&engine, now());
        record.toggle_favorite(&engine, now());

        assert_eq!(
            (record.favorite, record.auto_rating, record.final_rating),
            before
        );
    }

    #[test]
    fn set_manual_rating_recomputes_only_final() {
        let engine = PinnedEngine(2);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();
        let auto_before = record.auto_rating;

        record.set_manual_rating(4, &engine).unwrap();

        assert_eq!(record.manual_rating.value(), 4);
        assert_eq!(record.auto_rating, auto_before);
        // round(0.7*4 + 0.3*2) = round(3.4) = 3
        assert_eq!(record.final_rating.value(), 3);
    }

    #[test]
    fn set_manual_rating_rejects_out_of_range() {
        let engine = PinnedEngine(2);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();
        assert!(record.set_manual_rating(0, &engine).is_err());
        assert!(record.set_manual_rating(6, &engine).is_err());
        assert_eq!(record.manual_rating, Rating::DEFAULT_MANUAL);
    }

    #[test]
    fn edit_touches_only_descriptive_fields() {
        let engine = PinnedEngine(2);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();
        record.mark_cooked(&engine, now());
        let (auto, fin, cooked) = (record.auto_rating, record.final_rating, record.times_cooked);

        record
            .edit(RecipeEdit {
                title: Some("Shakshuka deluxe".into()),
                servings: Some(4),
                ..RecipeEdit::default()
            })
            .unwrap();

        assert_eq!(record.title, "Shakshuka deluxe");
        assert_eq!(record.servings, 4);
        assert_eq!(record.auto_rating, auto);
        assert_eq!(record.final_rating, fin);
        assert_eq!(record.times_cooked, cooked);
    }

    #[test]
    fn edit_rejects_empty_descriptive_fields() {
        let engine = PinnedEngine(2);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();

        let err = record
            .edit(RecipeEdit {
                steps: Some(vec![]),
                ..RecipeEdit::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn repair_usage_fields_rederives_from_history() {
        let engine = PinnedEngine(1);
        let mut record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();
        record.cooking_history = vec![now(), now() + chrono::Duration::days(3)];
        record.times_cooked = 99;
        record.last_cooked_at = None;

        record.repair_usage_fields();

        assert_eq!(record.times_cooked, 2);
        assert_eq!(
            record.last_cooked_at,
            Some(now() + chrono::Duration::days(3))
        );
    }

    #[test]
    fn legacy_payload_without_derived_fields_deserializes() {
        let json = r#"{
            "id": "r-1",
            "title": "Toast",
            "ingredients": ["bread"],
            "steps": ["toast it"],
            "time": 5,
            "servings": 1,
            "createdAt": "2026-01-01T00:00:00Z"
        }"#;
        let record: RecipeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.times_cooked, 0);
        assert!(record.cooking_history.is_empty());
        assert_eq!(record.manual_rating, Rating::DEFAULT_MANUAL);
        assert!(!record.favorite);
        assert_eq!(record.difficulty, Difficulty::Medium);
    }

    #[test]
    fn persisted_shape_uses_canonical_names() {
        let engine = PinnedEngine(1);
        let record = RecipeRecord::create(new_recipe(), &engine, now()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        for key in [
            "id",
            "title",
            "ingredients",
            "steps",
            "time",
            "servings",
            "difficulty",
            "categories",
            "favorite",
            "manualRating",
            "autoRating",
            "finalRating",
            "createdAt",
            "lastCookedAt",
            "timesCooked",
            "cookingHistory",
            "notes",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}: {json}");
        }
    }
}

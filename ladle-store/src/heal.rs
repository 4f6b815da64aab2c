use ladle_core::RecipeRecord;

/// Structural self-healing applied to every record coming off disk.
///
/// Older schema versions and torn writes can leave `times_cooked` and
/// `last_cooked_at` out of step with the cooking history; the history is
/// the source of truth, so both are re-derived from it. Records missing
/// fields entirely are already backfilled with schema defaults during
/// deserialization.
pub fn repair_all(records: &mut [RecipeRecord]) {
    for record in records.iter_mut() {
        let before = (record.times_cooked, record.last_cooked_at);
        record.repair_usage_fields();
        if before != (record.times_cooked, record.last_cooked_at) {
            tracing::debug!(
                recipe_id = %record.id,
                times_cooked = record.times_cooked,
                "healed usage fields from cooking history"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{Duration, TimeZone, Utc};
    use ladle_core::{Difficulty, Rating, RecipeRecord};

    use super::*;

    #[test]
    fn counters_rederived_from_history() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();
        let mut records = vec![RecipeRecord {
            id: "heal-1".into(),
            title: "Stew".into(),
            ingredients: vec!["beef".into()],
            steps: vec!["braise".into()],
            time_minutes: 120,
            servings: 4,
            difficulty: Difficulty::Hard,
            categories: BTreeSet::new(),
            favorite: false,
            manual_rating: Rating::DEFAULT_MANUAL,
            auto_rating: Rating::MIN,
            final_rating: Rating::MIN,
            created_at: now - Duration::days(30),
            last_cooked_at: None,
            times_cooked: 7,
            cooking_history: vec![now - Duration::days(10), now - Duration::days(2)],
            notes: String::new(),
        }];

        repair_all(&mut records);

        assert_eq!(records[0].times_cooked, 2);
        assert_eq!(records[0].last_cooked_at, Some(now - Duration::days(2)));
    }
}

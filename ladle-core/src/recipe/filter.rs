use serde::{Deserialize, Serialize};

use super::{Difficulty, Rating, RecipeRecord};

/// Filter for listing recipes. All criteria are conjunctive; the default
/// filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeFilter {
    /// Exact category membership.
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub favorites_only: bool,
    /// Keep records whose final rating is at least this value.
    pub min_final_rating: Option<Rating>,
    /// Case-insensitive title substring.
    pub title_contains: Option<String>,
}

impl RecipeFilter {
    pub fn matches(&self, record: &RecipeRecord) -> bool {
        if let Some(category) = &self.category {
            if !record.categories.contains(category) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if record.difficulty != difficulty {
                return false;
            }
        }
        if self.favorites_only && !record.favorite {
            return false;
        }
        if let Some(min) = self.min_final_rating {
            if record.final_rating < min {
                return false;
            }
        }
        if let Some(needle) = &self.title_contains {
            if !record
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::Difficulty;

/// Validated creation input for a recipe.
///
/// Usage counters and derived ratings are not part of the input — they are
/// seeded and computed by [`super::RecipeRecord::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(rename = "time")]
    pub time_minutes: u32,
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub notes: String,
    /// Optional initial manual rating; defaults to 3 when absent.
    #[serde(default)]
    pub manual_rating: Option<u8>,
}

impl NewRecipe {
    /// Check every creation rule and report all offending fields at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = ValidationError::new();
        if self.title.trim().is_empty() {
            issues.push("title", "must not be empty");
        }
        if self.ingredients.is_empty() {
            issues.push("ingredients", "at least one ingredient is required");
        }
        if self.steps.is_empty() {
            issues.push("steps", "at least one step is required");
        }
        if self.time_minutes == 0 {
            issues.push("time", "must be greater than zero minutes");
        }
        if self.servings == 0 {
            issues.push("servings", "must be at least 1");
        }
        if let Some(r) = self.manual_rating {
            if !(1..=5).contains(&r) {
                issues.push("manualRating", format!("must be between 1 and 5, got {r}"));
            }
        }
        issues.into_result()
    }
}

/// Partial descriptive update. Fields left as `None` are unchanged.
/// Rating and usage-counter fields are deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEdit {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    #[serde(rename = "time")]
    pub time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub categories: Option<BTreeSet<String>>,
    pub notes: Option<String>,
}

impl RecipeEdit {
    /// Provided fields obey the same rules as creation, so an edit can
    /// never leave a record in a state `create` would have rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = ValidationError::new();
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                issues.push("title", "must not be empty");
            }
        }
        if let Some(ingredients) = &self.ingredients {
            if ingredients.is_empty() {
                issues.push("ingredients", "at least one ingredient is required");
            }
        }
        if let Some(steps) = &self.steps {
            if steps.is_empty() {
                issues.push("steps", "at least one step is required");
            }
        }
        if let Some(time_minutes) = self.time_minutes {
            if time_minutes == 0 {
                issues.push("time", "must be greater than zero minutes");
            }
        }
        if let Some(servings) = self.servings {
            if servings == 0 {
                issues.push("servings", "must be at least 1");
            }
        }
        issues.into_result()
    }
}

pub mod difficulty;
pub mod filter;
pub mod input;
pub mod rating;
pub mod record;

pub use difficulty::Difficulty;
pub use filter::RecipeFilter;
pub use input::{NewRecipe, RecipeEdit};
pub use rating::Rating;
pub use record::RecipeRecord;

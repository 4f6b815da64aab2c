pub mod clock;
pub mod rating;
pub mod storage;

pub use clock::{IClock, SystemClock};
pub use rating::IRatingEngine;
pub use storage::IRecipeStore;

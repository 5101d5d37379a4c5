pub mod battle;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod random;
pub mod state;

pub use battle::{BattleEngine, BattleReport};
pub use error::{MealError, Result};
pub use models::{Difficulty, Meal, Outcome};

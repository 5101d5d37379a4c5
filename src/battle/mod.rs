pub mod constants;
pub mod engine;
pub mod scoring;

pub use constants::*;
pub use engine::{BattleEngine, BattleReport};
pub use scoring::{compute_score, normalized_delta, win_probability};

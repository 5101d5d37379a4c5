use crate::models::Difficulty;

/// Score penalty for a LOW difficulty meal.
pub const LOW_PENALTY: f64 = 3.0;

/// Score penalty for a MED difficulty meal.
pub const MED_PENALTY: f64 = 2.0;

/// Score penalty for a HIGH difficulty meal.
pub const HIGH_PENALTY: f64 = 1.0;

/// Divisor applied to the raw score gap before the logistic link.
pub const DELTA_SCALE: f64 = 100.0;

/// Normalized deltas are clamped to `[-DELTA_CLAMP, DELTA_CLAMP]`.
pub const DELTA_CLAMP: f64 = 1.0;

/// Maximum number of staged combatants.
pub const MAX_COMBATANTS: usize = 2;

/// Score penalty for a difficulty level. Harder dishes lose less.
pub fn difficulty_penalty(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Low => LOW_PENALTY,
        Difficulty::Med => MED_PENALTY,
        Difficulty::High => HIGH_PENALTY,
    }
}

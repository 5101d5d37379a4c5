use crate::battle::constants::{DELTA_CLAMP, DELTA_SCALE, difficulty_penalty};
use crate::models::Meal;

/// Battle score of a meal.
///
/// Formula: price * cuisine_chars - difficulty_penalty
pub fn compute_score(meal: &Meal) -> f64 {
    meal.price * meal.cuisine_len() as f64 - difficulty_penalty(meal.difficulty)
}

/// Score gap scaled by `DELTA_SCALE` and clamped to `[-DELTA_CLAMP, DELTA_CLAMP]`.
pub fn normalized_delta(score_a: f64, score_b: f64) -> f64 {
    ((score_a - score_b) / DELTA_SCALE).clamp(-DELTA_CLAMP, DELTA_CLAMP)
}

/// Probability that the first combatant wins, via a logistic link.
///
/// Symmetric around zero: equal scores give 0.5.
pub fn win_probability(score_a: f64, score_b: f64) -> f64 {
    let delta = normalized_delta(score_a, score_b);
    1.0 / (1.0 + (-delta).exp())
}

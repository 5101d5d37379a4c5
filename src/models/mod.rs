mod leaderboard;
mod meal;

pub use leaderboard::{LeaderboardEntry, SortBy};
pub use meal::{Difficulty, Meal, Outcome};

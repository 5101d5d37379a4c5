use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MealError;
use crate::models::{Difficulty, Meal};

/// Leaderboard ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Wins,
    WinPct,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Wins => f.write_str("wins"),
            SortBy::WinPct => f.write_str("win_pct"),
        }
    }
}

impl FromStr for SortBy {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(SortBy::Wins),
            "win_pct" => Ok(SortBy::WinPct),
            other => Err(MealError::InvalidSortBy(other.to_string())),
        }
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

impl LeaderboardEntry {
    /// Build a row from a meal that has fought at least once.
    pub fn from_meal(meal: &Meal) -> Option<Self> {
        let win_pct = meal.win_pct()?;
        Some(Self {
            id: meal.id,
            meal: meal.name.clone(),
            cuisine: meal.cuisine.clone(),
            price: meal.price,
            difficulty: meal.difficulty,
            battles: meal.battles,
            wins: meal.wins,
            win_pct,
        })
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// How hard a meal is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            other => Err(MealError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Result of a battle from one participant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            other => Err(MealError::InvalidOutcome(other.to_string())),
        }
    }
}

/// A meal record with its battle statistics.
///
/// Deleted meals stay in the store but never battle again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: u32,

    #[serde(rename = "meal")]
    pub name: String,

    pub cuisine: String,

    pub price: f64,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub battles: u32,

    #[serde(default)]
    pub wins: u32,
}

impl Meal {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
            deleted: false,
            battles: 0,
            wins: 0,
        }
    }

    /// Length of the cuisine in characters, not bytes.
    #[inline]
    pub fn cuisine_len(&self) -> usize {
        self.cuisine.chars().count()
    }

    /// Apply one battle result to the counters.
    pub fn record(&mut self, outcome: Outcome) {
        self.battles = self.battles.saturating_add(1);
        if outcome == Outcome::Win {
            self.wins = self.wins.saturating_add(1);
        }
    }

    /// Win percentage rounded to one decimal, `None` before the first battle.
    pub fn win_pct(&self) -> Option<f64> {
        if self.battles == 0 {
            return None;
        }
        let pct = self.wins as f64 / self.battles as f64 * 100.0;
        Some((pct * 10.0).round() / 10.0)
    }
}

use std::collections::BTreeMap;

use crate::error::{MealError, Result};
use crate::models::{Difficulty, LeaderboardEntry, Meal, Outcome, SortBy};
use crate::state::MealStore;

/// Owns every meal record, deleted ones included, keyed by id.
#[derive(Debug, Default)]
pub struct MealStateManager {
    meals: BTreeMap<u32, Meal>,
}

impl MealStateManager {
    /// Create a new state manager from a list of meals.
    pub fn new(meals: Vec<Meal>) -> Self {
        let mut map = BTreeMap::new();
        for meal in meals {
            map.insert(meal.id, meal);
        }
        Self { meals: map }
    }

    /// Register a new meal and return it.
    ///
    /// Names only need to be unique among meals that are not deleted.
    pub fn create_meal(
        &mut self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<Meal> {
        if !(price.is_finite() && price > 0.0) {
            return Err(MealError::InvalidPrice(price));
        }
        if name.trim().is_empty() {
            return Err(MealError::InvalidInput("meal name must not be empty".to_string()));
        }
        if cuisine.trim().is_empty() {
            return Err(MealError::InvalidInput("cuisine must not be empty".to_string()));
        }
        if self.active_by_name(name).is_some() {
            return Err(MealError::DuplicateMeal(name.to_string()));
        }

        let id = self.next_id();
        let meal = Meal::new(id, name, cuisine, price, difficulty);
        self.meals.insert(id, meal.clone());
        tracing::info!(id, name, "created meal");
        Ok(meal)
    }

    /// Soft-delete a meal. It keeps its id and counters but leaves competition.
    pub fn delete_meal(&mut self, id: u32) -> Result<()> {
        let meal = self.get_active_mut(id)?;
        meal.deleted = true;
        tracing::info!(id, "meal marked as deleted");
        Ok(())
    }

    /// Remove every meal record.
    pub fn clear_meals(&mut self) {
        let count = self.meals.len();
        self.meals.clear();
        tracing::info!(count, "cleared all meals");
    }

    pub fn get_meal_by_id(&self, id: u32) -> Result<&Meal> {
        match self.meals.get(&id) {
            None => Err(MealError::MealNotFound(id)),
            Some(meal) if meal.deleted => Err(MealError::MealDeleted(id)),
            Some(meal) => Ok(meal),
        }
    }

    /// Look up an active meal by exact name.
    pub fn get_meal_by_name(&self, name: &str) -> Result<&Meal> {
        if let Some(meal) = self.active_by_name(name) {
            return Ok(meal);
        }
        if self.meals.values().any(|m| m.name == name) {
            Err(MealError::MealNameDeleted(name.to_string()))
        } else {
            Err(MealError::MealNameNotFound(name.to_string()))
        }
    }

    /// Count one battle for a meal, plus a win when it won.
    pub fn update_meal_stats(&mut self, id: u32, outcome: Outcome) -> Result<()> {
        let meal = self.get_active_mut(id)?;
        meal.record(outcome);
        tracing::info!(id, %outcome, battles = meal.battles, wins = meal.wins, "updated meal stats");
        Ok(())
    }

    /// Active meals that have fought at least once, best first.
    pub fn get_leaderboard(&self, sort_by: SortBy) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .meals
            .values()
            .filter(|m| !m.deleted)
            .filter_map(LeaderboardEntry::from_meal)
            .collect();

        match sort_by {
            SortBy::Wins => entries.sort_by(|a, b| b.wins.cmp(&a.wins)),
            SortBy::WinPct => entries.sort_by(|a, b| {
                b.win_pct
                    .partial_cmp(&a.win_pct)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }

        entries
    }

    /// Names of all active meals.
    pub fn names(&self) -> Vec<&str> {
        self.active_meals().into_iter().map(|m| m.name.as_str()).collect()
    }

    /// Get all meals that can still battle.
    pub fn active_meals(&self) -> Vec<&Meal> {
        self.meals.values().filter(|m| !m.deleted).collect()
    }

    /// Convert state to a list of meals for JSON serialization.
    pub fn to_meals(&self) -> Vec<Meal> {
        self.meals.values().cloned().collect()
    }

    /// Count of meals in the manager.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Check if manager has no meals.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    fn next_id(&self) -> u32 {
        self.meals.keys().next_back().map_or(1, |id| id + 1)
    }

    fn active_by_name(&self, name: &str) -> Option<&Meal> {
        self.meals.values().find(|m| !m.deleted && m.name == name)
    }

    fn get_active_mut(&mut self, id: u32) -> Result<&mut Meal> {
        match self.meals.get_mut(&id) {
            None => Err(MealError::MealNotFound(id)),
            Some(meal) if meal.deleted => Err(MealError::MealDeleted(id)),
            Some(meal) => Ok(meal),
        }
    }
}

impl MealStore for MealStateManager {
    fn get_meal(&self, id: u32) -> Result<Meal> {
        self.get_meal_by_id(id).cloned()
    }

    fn update_stats(&mut self, id: u32, outcome: Outcome) -> Result<()> {
        self.update_meal_stats(id, outcome)
    }
}

mod manager;
mod persistence;

pub use manager::MealStateManager;
pub use persistence::{load_meals, load_meals_or_empty, save_meals};

use crate::error::Result;
use crate::models::{Meal, Outcome};

/// The record store a battle reads participants from and commits results to.
pub trait MealStore {
    /// Fetch an active meal. Deleted or unknown ids are errors.
    fn get_meal(&self, id: u32) -> Result<Meal>;

    /// Count one battle for `id`, and one win if `outcome` is a win.
    fn update_stats(&mut self, id: u32, outcome: Outcome) -> Result<()>;
}

impl<S: MealStore + ?Sized> MealStore for &mut S {
    fn get_meal(&self, id: u32) -> Result<Meal> {
        (**self).get_meal(id)
    }

    fn update_stats(&mut self, id: u32, outcome: Outcome) -> Result<()> {
        (**self).update_stats(id, outcome)
    }
}

use crate::battle::constants::MAX_COMBATANTS;
use crate::battle::scoring::{compute_score, win_probability};
use crate::error::{MealError, Result};
use crate::models::{Meal, Outcome};
use crate::random::RandomSource;
use crate::state::MealStore;

/// What happened in one resolved battle.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    /// Winner snapshot with its counters already updated.
    pub winner: Meal,

    /// Loser snapshot with its counters already updated.
    pub loser: Meal,

    /// Scores of the two combatants in slot order.
    pub scores: [f64; 2],

    /// Probability that the first staged combatant wins.
    pub win_probability: f64,

    /// The random draw that decided the battle.
    pub draw: f64,
}

impl BattleReport {
    pub fn winner_name(&self) -> &str {
        &self.winner.name
    }

    pub fn winner_id(&self) -> u32 {
        self.winner.id
    }
}

/// Stages up to two meals and resolves a battle between them.
///
/// The engine owns its combatant list. The random source and the meal store
/// are injected at construction; pass `&source` / `&mut store` to keep
/// ownership on the caller side.
pub struct BattleEngine<R, S> {
    combatants: Vec<Meal>,
    random: R,
    store: S,
}

impl<R: RandomSource, S: MealStore> BattleEngine<R, S> {
    pub fn new(random: R, store: S) -> Self {
        Self {
            combatants: Vec::with_capacity(MAX_COMBATANTS),
            random,
            store,
        }
    }

    /// Stage a meal snapshot. Fails once two combatants are staged.
    pub fn prep_combatant(&mut self, meal: Meal) -> Result<()> {
        if self.combatants.len() >= MAX_COMBATANTS {
            tracing::error!(meal = %meal.name, "combatant list is full");
            return Err(MealError::CapacityExceeded);
        }
        tracing::info!(id = meal.id, meal = %meal.name, "prepping combatant");
        self.combatants.push(meal);
        Ok(())
    }

    /// Fetch a meal from the store and stage it.
    pub fn prep_combatant_by_id(&mut self, id: u32) -> Result<()> {
        if self.combatants.len() >= MAX_COMBATANTS {
            return Err(MealError::CapacityExceeded);
        }
        if self.combatants.iter().any(|m| m.id == id) {
            return Err(MealError::DuplicateCombatant(id));
        }
        let meal = self.store.get_meal(id)?;
        self.prep_combatant(meal)
    }

    /// Staged combatants in insertion order.
    pub fn get_combatants(&self) -> &[Meal] {
        &self.combatants
    }

    pub fn clear_combatants(&mut self) {
        tracing::info!("clearing combatant list");
        self.combatants.clear();
    }

    /// Resolve a battle between the two staged combatants.
    ///
    /// On success both counters are committed, the loser leaves the slot list
    /// and the winner stays staged. On failure nothing changes.
    pub fn battle(&mut self) -> Result<BattleReport> {
        if self.combatants.len() < MAX_COMBATANTS {
            tracing::error!(staged = self.combatants.len(), "not enough combatants");
            return Err(MealError::InsufficientCombatants);
        }
        if self.combatants[0].id == self.combatants[1].id {
            tracing::error!(id = self.combatants[0].id, "a meal cannot battle itself");
            return Err(MealError::DuplicateCombatant(self.combatants[0].id));
        }

        let score_a = compute_score(&self.combatants[0]);
        let score_b = compute_score(&self.combatants[1]);
        let win_prob_a = win_probability(score_a, score_b);
        tracing::debug!(score_a, score_b, win_prob_a, "computed battle scores");

        let draw = self.random.get_random()?;
        let (winner_idx, loser_idx) = if draw < win_prob_a { (0, 1) } else { (1, 0) };
        let winner_id = self.combatants[winner_idx].id;
        let loser_id = self.combatants[loser_idx].id;

        // Both participants are checked before either write, so a rejected
        // commit never leaves one side updated.
        self.check_participant(winner_id)?;
        self.check_participant(loser_id)?;
        self.commit(winner_id, Outcome::Win)?;
        self.commit(loser_id, Outcome::Loss)?;

        let mut loser = self.combatants.remove(loser_idx);
        loser.record(Outcome::Loss);
        let winner = &mut self.combatants[0];
        winner.record(Outcome::Win);

        tracing::info!(
            winner = %winner.name,
            loser = %loser.name,
            draw,
            win_prob_a,
            "battle resolved"
        );

        Ok(BattleReport {
            winner: winner.clone(),
            loser,
            scores: [score_a, score_b],
            win_probability: win_prob_a,
            draw,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn check_participant(&self, id: u32) -> Result<()> {
        match self.store.get_meal(id) {
            Ok(meal) if meal.deleted => Err(reject(id, MealError::MealDeleted(id))),
            Ok(_) => Ok(()),
            Err(e) if e.is_participant_rejection() => Err(reject(id, e)),
            Err(e) => Err(e),
        }
    }

    fn commit(&mut self, id: u32, outcome: Outcome) -> Result<()> {
        self.store.update_stats(id, outcome).map_err(|e| {
            if e.is_participant_rejection() {
                reject(id, e)
            } else {
                e
            }
        })
    }
}

fn reject(id: u32, cause: MealError) -> MealError {
    tracing::warn!(id, %cause, "store rejected battle participant");
    MealError::InvalidParticipant {
        id,
        reason: cause.to_string(),
    }
}

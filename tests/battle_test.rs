#[macro_use]
extern crate assert_float_eq;

use meal_max_rs::battle::{BattleEngine, compute_score, win_probability};
use meal_max_rs::error::{MealError, Result};
use meal_max_rs::models::{Difficulty, Meal, SortBy};
use meal_max_rs::random::RandomSource;
use meal_max_rs::state::{MealStateManager, load_meals, save_meals};

struct FixedDraw(f64);

impl RandomSource for FixedDraw {
    fn get_random(&self) -> Result<f64> {
        Ok(self.0)
    }
}

fn kitchen() -> MealStateManager {
    let mut manager = MealStateManager::default();
    manager
        .create_meal("Spaghetti", "Italian", 25.0, Difficulty::Med)
        .unwrap();
    manager
        .create_meal("Sushi", "Japanese", 30.0, Difficulty::High)
        .unwrap();
    manager
        .create_meal("Hamburger", "American", 10.0, Difficulty::Low)
        .unwrap();
    manager
}

#[test]
fn test_penalty_per_difficulty() {
    for (difficulty, penalty) in [
        (Difficulty::Low, 3.0),
        (Difficulty::Med, 2.0),
        (Difficulty::High, 1.0),
    ] {
        let meal = Meal::new(1, "Dish", "Korean", 9.5, difficulty);
        assert_float_absolute_eq!(compute_score(&meal), 9.5 * 6.0 - penalty, 1e-12);
    }
}

#[test]
fn test_documented_scenario() {
    let manager = kitchen();
    let spaghetti = manager.get_meal_by_id(1).unwrap();
    let sushi = manager.get_meal_by_id(2).unwrap();

    assert_eq!(compute_score(spaghetti), 173.0);
    assert_eq!(compute_score(sushi), 239.0);
    assert_float_absolute_eq!(win_probability(173.0, 239.0), 0.3407, 1e-4);
}

#[test]
fn test_battle_commits_to_store() {
    let mut manager = kitchen();

    let report = {
        let mut engine = BattleEngine::new(FixedDraw(0.1), &mut manager);
        engine.prep_combatant_by_id(1).unwrap();
        engine.prep_combatant_by_id(2).unwrap();
        let report = engine.battle().unwrap();

        assert_eq!(engine.get_combatants().len(), 1);
        assert_eq!(engine.get_combatants()[0].id, report.winner_id());
        report
    };

    assert_eq!(report.winner_name(), "Spaghetti");

    let spaghetti = manager.get_meal_by_id(1).unwrap();
    assert_eq!((spaghetti.battles, spaghetti.wins), (1, 1));
    let sushi = manager.get_meal_by_id(2).unwrap();
    assert_eq!((sushi.battles, sushi.wins), (1, 0));
    let hamburger = manager.get_meal_by_id(3).unwrap();
    assert_eq!((hamburger.battles, hamburger.wins), (0, 0));
}

#[test]
fn test_winner_stays_for_next_battle() {
    let mut manager = kitchen();
    let mut engine = BattleEngine::new(FixedDraw(0.99), &mut manager);

    engine.prep_combatant_by_id(1).unwrap();
    engine.prep_combatant_by_id(2).unwrap();
    assert_eq!(engine.battle().unwrap().winner_name(), "Sushi");

    // Sushi (239) against Hamburger (77): the second slot only wins on a very high draw.
    engine.prep_combatant_by_id(3).unwrap();
    let names: Vec<&str> = engine.get_combatants().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Sushi", "Hamburger"]);
    assert_eq!(engine.battle().unwrap().winner_name(), "Hamburger");

    let sushi = engine.store().get_meal_by_id(2).unwrap();
    assert_eq!((sushi.battles, sushi.wins), (2, 1));
}

#[test]
fn test_returned_combatants_are_a_copy() {
    let mut manager = kitchen();
    let mut engine = BattleEngine::new(FixedDraw(0.1), &mut manager);
    engine.prep_combatant_by_id(1).unwrap();
    engine.prep_combatant_by_id(2).unwrap();

    let mut copy = engine.get_combatants().to_vec();
    copy[0].price = 1.0;
    copy.swap(0, 1);
    copy.pop();

    assert_eq!(engine.get_combatants().len(), 2);
    assert_eq!(engine.get_combatants()[0].price, 25.0);
    assert_eq!(engine.battle().unwrap().winner_name(), "Spaghetti");
}

#[test]
fn test_deleted_meal_cannot_finish_battle() {
    let mut manager = kitchen();
    let sushi = manager.get_meal_by_id(2).unwrap().clone();
    let spaghetti = manager.get_meal_by_id(1).unwrap().clone();
    manager.delete_meal(2).unwrap();

    {
        let mut engine = BattleEngine::new(FixedDraw(0.1), &mut manager);
        engine.prep_combatant(spaghetti).unwrap();
        engine.prep_combatant(sushi).unwrap();

        let err = engine.battle().unwrap_err();
        assert!(matches!(err, MealError::InvalidParticipant { id: 2, .. }));
        assert_eq!(engine.get_combatants().len(), 2);
    }

    let spaghetti = manager.get_meal_by_id(1).unwrap();
    assert_eq!((spaghetti.battles, spaghetti.wins), (0, 0));
}

#[test]
fn test_results_survive_reload() {
    let mut manager = kitchen();
    {
        let mut engine = BattleEngine::new(FixedDraw(0.1), &mut manager);
        engine.prep_combatant_by_id(1).unwrap();
        engine.prep_combatant_by_id(3).unwrap();
        engine.battle().unwrap();
    }

    let file = tempfile::NamedTempFile::new().unwrap();
    save_meals(file.path(), &manager.to_meals()).unwrap();
    let reloaded = MealStateManager::new(load_meals(file.path()).unwrap());

    let board = reloaded.get_leaderboard(SortBy::Wins);
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].meal, "Spaghetti");
    assert_eq!(board[0].win_pct, 100.0);
    assert_eq!(board[1].meal, "Hamburger");
    assert_eq!(board[1].win_pct, 0.0);
}

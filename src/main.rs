use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_max_rs::battle::BattleEngine;
use meal_max_rs::cli::{Cli, Command};
use meal_max_rs::error::{MealError, Result};
use meal_max_rs::interface::{
    display_battle_report, display_leaderboard, display_meal, prompt_did_you_mean,
    suggest_meal_names, write_leaderboard_csv,
};
use meal_max_rs::models::{Difficulty, SortBy};
use meal_max_rs::random::{LocalRandomSource, RandomOrgConfig, RandomOrgSource, RandomSource};
use meal_max_rs::state::{MealStateManager, load_meals_or_empty, save_meals};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meal_max_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.file.as_path();

    match cli.command {
        Command::Create {
            name,
            cuisine,
            price,
            difficulty,
        } => cmd_create(path, &name, &cuisine, price, &difficulty),
        Command::Delete { id } => cmd_delete(path, id),
        Command::Get { id, name } => cmd_get(path, id, name),
        Command::Battle {
            first,
            second,
            offline,
            timeout,
        } => cmd_battle(path, first, second, offline, timeout),
        Command::Leaderboard { sort_by, csv } => cmd_leaderboard(path, &sort_by, csv.as_deref()),
        Command::Clear => cmd_clear(path),
    }
}

fn load_manager(path: &Path) -> Result<MealStateManager> {
    Ok(MealStateManager::new(load_meals_or_empty(path)?))
}

/// Register a new meal.
fn cmd_create(path: &Path, name: &str, cuisine: &str, price: f64, difficulty: &str) -> Result<()> {
    let difficulty: Difficulty = difficulty.parse()?;
    let mut manager = load_manager(path)?;

    let meal = manager.create_meal(name, cuisine, price, difficulty)?;
    save_meals(path, &manager.to_meals())?;

    println!("Created meal:");
    display_meal(&meal);
    Ok(())
}

/// Soft-delete a meal.
fn cmd_delete(path: &Path, id: u32) -> Result<()> {
    let mut manager = load_manager(path)?;
    manager.delete_meal(id)?;
    save_meals(path, &manager.to_meals())?;

    println!("Meal {} deleted.", id);
    Ok(())
}

/// Show a meal, offering close matches for unknown names.
fn cmd_get(path: &Path, id: Option<u32>, name: Option<String>) -> Result<()> {
    let manager = load_manager(path)?;

    if let Some(id) = id {
        display_meal(manager.get_meal_by_id(id)?);
        return Ok(());
    }

    let name = name.unwrap_or_default();
    match manager.get_meal_by_name(&name) {
        Ok(meal) => display_meal(meal),
        Err(MealError::MealNameNotFound(_)) => {
            let names = manager.names();
            let suggestions = suggest_meal_names(&name, &names);
            if let Some(choice) = prompt_did_you_mean(&name, &suggestions)? {
                display_meal(manager.get_meal_by_name(&choice)?);
            }
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Stage two meals, battle them, and persist the outcome.
fn cmd_battle(path: &Path, first: u32, second: u32, offline: bool, timeout: u64) -> Result<()> {
    let mut manager = load_manager(path)?;

    let random: Box<dyn RandomSource> = if offline {
        Box::new(LocalRandomSource)
    } else {
        Box::new(RandomOrgSource::new(RandomOrgConfig {
            timeout: Duration::from_secs(timeout),
            ..RandomOrgConfig::default()
        })?)
    };

    let report = {
        let mut engine = BattleEngine::new(random, &mut manager);
        engine.prep_combatant_by_id(first)?;
        engine.prep_combatant_by_id(second)?;
        engine.battle()?
    };

    save_meals(path, &manager.to_meals())?;
    display_battle_report(&report);
    Ok(())
}

/// Show the leaderboard, optionally exporting it as CSV.
fn cmd_leaderboard(path: &Path, sort_by: &str, csv: Option<&Path>) -> Result<()> {
    let sort_by: SortBy = sort_by.parse()?;
    let manager = load_manager(path)?;

    let entries = manager.get_leaderboard(sort_by);
    display_leaderboard(&entries);

    if let Some(csv_path) = csv {
        write_leaderboard_csv(&entries, csv_path)?;
        println!("Leaderboard written to {}", csv_path.display());
    }

    Ok(())
}

/// Remove every meal.
fn cmd_clear(path: &Path) -> Result<()> {
    let mut manager = load_manager(path)?;
    manager.clear_meals();
    save_meals(path, &manager.to_meals())?;

    println!("All meals cleared.");
    Ok(())
}

use std::path::Path;

use crate::battle::BattleReport;
use crate::error::Result;
use crate::models::{LeaderboardEntry, Meal};

/// Display a single meal with its record.
pub fn display_meal(meal: &Meal) {
    let status = if meal.deleted { " [deleted]" } else { "" };
    println!(
        "#{} {} ({}, {}) - ${:.2} | {} wins / {} battles{}",
        meal.id,
        meal.name,
        meal.cuisine,
        meal.difficulty,
        meal.price,
        meal.wins,
        meal.battles,
        status
    );
}

/// Display a resolved battle.
pub fn display_battle_report(report: &BattleReport) {
    println!();
    println!("=== Battle ===");
    println!();
    println!(
        "Scores: {:.2} vs {:.2} | first-slot win chance {:.1}% | draw {:.2}",
        report.scores[0],
        report.scores[1],
        report.win_probability * 100.0,
        report.draw
    );
    println!("Winner: {}", report.winner.name);
    println!("Loser:  {}", report.loser.name);
    println!();
}

/// Display the leaderboard in a formatted table.
pub fn display_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No meals have battled yet.");
        return;
    }

    println!();
    println!("=== Leaderboard ===");
    println!();

    let max_name_len = entries.iter().map(|e| e.meal.len()).max().unwrap_or(10);

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>3} wins / {:>3} battles ({:>5.1}%)",
            i + 1,
            entry.meal,
            entry.wins,
            entry.battles,
            entry.win_pct,
            width = max_name_len
        );
    }

    println!();
}

/// Write the leaderboard to a CSV file.
pub fn write_leaderboard_csv(entries: &[LeaderboardEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "id",
        "meal",
        "cuisine",
        "price",
        "difficulty",
        "battles",
        "wins",
        "win_pct",
    ])?;

    for (i, entry) in entries.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entry.id.to_string(),
            entry.meal.clone(),
            entry.cuisine.clone(),
            format!("{:.2}", entry.price),
            entry.difficulty.to_string(),
            entry.battles.to_string(),
            entry.wins.to_string(),
            format!("{:.1}", entry.win_pct),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

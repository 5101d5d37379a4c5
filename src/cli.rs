use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal Max: register meals and let them battle.
#[derive(Parser, Debug)]
#[command(name = "meal_max")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the meal state JSON file.
    #[arg(short, long, env = "MEAL_MAX_FILE", default_value = "meals.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new meal.
    Create {
        name: String,

        cuisine: String,

        #[arg(allow_negative_numbers = true)]
        price: f64,

        /// LOW, MED or HIGH.
        difficulty: String,
    },

    /// Mark a meal as deleted. It keeps its record but never battles again.
    Delete { id: u32 },

    /// Show a meal by id or by name.
    Get {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<u32>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Stage two meals and resolve one battle between them.
    Battle {
        first: u32,

        second: u32,

        /// Draw locally instead of asking random.org.
        #[arg(long)]
        offline: bool,

        /// random.org request timeout in seconds.
        #[arg(long, default_value = "5")]
        timeout: u64,
    },

    /// Show meals ranked by wins or win percentage.
    Leaderboard {
        /// wins or win_pct.
        #[arg(long, default_value = "wins")]
        sort_by: String,

        /// Also write the leaderboard to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Remove every meal.
    Clear,
}

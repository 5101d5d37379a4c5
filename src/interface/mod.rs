pub mod prompts;
pub mod render;
pub mod suggest;

pub use prompts::prompt_did_you_mean;
pub use render::{
    display_battle_report, display_leaderboard, display_meal, write_leaderboard_csv,
};
pub use suggest::suggest_meal_names;

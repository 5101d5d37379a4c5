use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Combatant list is full, cannot add more combatants.")]
    CapacityExceeded,

    #[error("Two combatants must be prepped for a battle.")]
    InsufficientCombatants,

    #[error("Meal with ID {0} is already staged as a combatant")]
    DuplicateCombatant(u32),

    #[error("Invalid participant {id}: {reason}")]
    InvalidParticipant { id: u32, reason: String },

    #[error("Request to random.org timed out.")]
    Timeout,

    #[error("Request to random.org failed: {0}")]
    Transport(String),

    #[error("Invalid response from random.org: {0}")]
    MalformedResponse(String),

    #[error("Meal with ID {0} not found")]
    MealNotFound(u32),

    #[error("Meal with name {0} not found")]
    MealNameNotFound(String),

    #[error("Meal with ID {0} has been deleted")]
    MealDeleted(u32),

    #[error("Meal with name {0} has been deleted")]
    MealNameDeleted(String),

    #[error("Meal with name '{0}' already exists")]
    DuplicateMeal(String),

    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidOutcome(String),

    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortBy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MealError {
    /// True for the store errors that disqualify a meal from a battle.
    pub fn is_participant_rejection(&self) -> bool {
        matches!(
            self,
            MealError::MealNotFound(_) | MealError::MealDeleted(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MealError>;

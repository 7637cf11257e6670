use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacraveError {
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Menu item '{item}' not found at {restaurant}")]
    ItemNotFound { restaurant: String, item: String },

    #[error("Invalid fitness goal: {0} (expected cutting, bulking or keto)")]
    InvalidGoal(String),

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Username not found: {0}")]
    UnknownUser(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MacraveError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid diet plan format: expected days with id, name and meals; meals with id, name and ingredients; ingredients with name and quantity")]
    InvalidPlanFormat,

    #[error("No diet plan loaded")]
    NoDietPlan,

    #[error("Day plan not found: {0}")]
    DayPlanNotFound(String),

    #[error("Pinned plan not found: {0}")]
    PinnedPlanNotFound(String),

    #[error("Meal {index} not found on {day}")]
    MealNotFound { day: String, index: usize },

    #[error("Ingredient {index} not found in meal '{meal}'")]
    IngredientNotFound { meal: String, index: usize },

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

pub type Result<T> = std::result::Result<T, PlannerError>;

pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod shopping;
pub mod state;

pub use config::Config;
pub use error::{PlannerError, Result};
pub use models::{DietPlan, Ingredient, Meal, WeekPlan, Weekday};
pub use shopping::{build_shopping_list, GroupedShoppingList, PriceEstimator};
pub use state::PlannerStateManager;

/// Two-day plan bundled with the binary.
pub const SAMPLE_PLAN: &str = include_str!("../data/sample_plan.json");

mod plan;
mod validation;
mod week;

pub use plan::{DayPlan, DietPlan, Ingredient, Meal, PinnedPlan};
pub use validation::{parse_diet_plan, validate_diet_plan};
pub use week::{WeekPlan, Weekday};

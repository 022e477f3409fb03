use serde_json::Value;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::DietPlan;

/// Parse and validate an uploaded diet plan.
///
/// Any structural problem yields the same generic `InvalidPlanFormat` error;
/// nothing is partially accepted.
pub fn parse_diet_plan(content: &str) -> Result<DietPlan> {
    let value: Value = serde_json::from_str(content).map_err(|e| {
        debug!("diet plan is not valid JSON: {}", e);
        PlannerError::InvalidPlanFormat
    })?;

    validate_diet_plan(&value)?;

    serde_json::from_value(value).map_err(|e| {
        debug!("diet plan failed to deserialize: {}", e);
        PlannerError::InvalidPlanFormat
    })
}

/// Check the structure of an uploaded diet plan.
pub fn validate_diet_plan(value: &Value) -> Result<()> {
    let days = match value.get("days").and_then(Value::as_array) {
        Some(days) if !days.is_empty() => days,
        _ => return reject("missing or empty days"),
    };

    for day in days {
        if !present(day, "id") || !present(day, "name") {
            return reject("day without id or name");
        }
        let Some(meals) = day.get("meals").and_then(Value::as_array) else {
            return reject("day without meals");
        };

        for meal in meals {
            if !present(meal, "id") || !present(meal, "name") {
                return reject("meal without id or name");
            }
            let Some(ingredients) = meal.get("ingredients").and_then(Value::as_array) else {
                return reject("meal without ingredients");
            };

            for ingredient in ingredients {
                if !present(ingredient, "name") || !present(ingredient, "quantity") {
                    return reject("ingredient without name or quantity");
                }
            }
        }
    }

    Ok(())
}

/// A field counts as present when it exists, is not null and is not an empty string.
fn present(value: &Value, field: &str) -> bool {
    match value.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

fn reject(reason: &str) -> Result<()> {
    debug!("rejecting diet plan: {}", reason);
    Err(PlannerError::InvalidPlanFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_days() {
        assert!(matches!(
            parse_diet_plan(r#"{"days": []}"#),
            Err(PlannerError::InvalidPlanFormat)
        ));
        assert!(parse_diet_plan(r#"{"days": "monday"}"#).is_err());
        assert!(parse_diet_plan(r#"{}"#).is_err());
    }

    #[test]
    fn test_rejects_missing_fields() {
        let no_meals = r#"{"days": [{"id": "1", "name": "Día 1"}]}"#;
        assert!(parse_diet_plan(no_meals).is_err());

        let no_quantity = r#"{"days": [{"id": "1", "name": "Día 1", "meals": [
            {"id": "m1", "name": "Desayuno", "ingredients": [{"name": "Huevo"}]}
        ]}]}"#;
        assert!(parse_diet_plan(no_quantity).is_err());

        let empty_name = r#"{"days": [{"id": "1", "name": "", "meals": []}]}"#;
        assert!(parse_diet_plan(empty_name).is_err());
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(
            parse_diet_plan("{ not json"),
            Err(PlannerError::InvalidPlanFormat)
        ));
    }

    #[test]
    fn test_accepts_day_without_meal_entries() {
        let plan = parse_diet_plan(r#"{"days": [{"id": "1", "name": "Descanso", "meals": []}]}"#)
            .unwrap();
        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].meals.is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// A raw ingredient line as authored in a diet plan.
///
/// Both fields are free text; `quantity` may be "1/2 taza", "150g" or "al gusto".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// A named meal with its ordered ingredient lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ingredients,
        }
    }
}

/// A day template from an uploaded diet plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub id: String,
    pub name: String,
    pub meals: Vec<Meal>,
}

/// An uploaded diet plan: the day templates a user can assign to the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub days: Vec<DayPlan>,
}

impl DietPlan {
    /// Find a day template by its exact id.
    pub fn day_by_id(&self, id: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.id == id)
    }

    /// Find a day template by name (case-insensitive).
    pub fn day_by_name(&self, name: &str) -> Option<&DayPlan> {
        let wanted = name.trim().to_lowercase();
        self.days.iter().find(|d| d.name.to_lowercase() == wanted)
    }

    /// Total number of meals across all day templates.
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }
}

/// A diet plan the user saved for later reuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedPlan {
    pub id: String,
    pub name: String,
    pub plan: DietPlan,
}

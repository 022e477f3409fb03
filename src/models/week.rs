use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Meal;

/// Fixed day keys of a week plan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Storage key (`monday`..`sunday`).
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meals assigned to each day of the week.
///
/// Every day is always present; an unset day is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekPlan {
    pub monday: Vec<Meal>,
    pub tuesday: Vec<Meal>,
    pub wednesday: Vec<Meal>,
    pub thursday: Vec<Meal>,
    pub friday: Vec<Meal>,
    pub saturday: Vec<Meal>,
    pub sunday: Vec<Meal>,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &[Meal] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut Vec<Meal> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Iterate days in calendar order with their meals.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Meal])> {
        Weekday::ALL.into_iter().map(move |d| (d, self.day(d)))
    }

    /// Replace a day's meals.
    pub fn set_day(&mut self, day: Weekday, meals: Vec<Meal>) {
        *self.day_mut(day) = meals;
    }

    /// True when no day has any meal assigned.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, meals)| meals.is_empty())
    }

    /// Total ingredient lines across the week.
    pub fn ingredient_count(&self) -> usize {
        self.iter()
            .flat_map(|(_, meals)| meals.iter())
            .map(|m| m.ingredients.len())
            .sum()
    }
}

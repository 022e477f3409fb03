use dialoguer::{Confirm, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{DayPlan, DietPlan};
use crate::shopping::{display_quantity, item_key, ChecklistState, GroupedShoppingList};

/// Minimum similarity for a day name to be offered as a suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Day templates whose id or name resembles `query`, best first.
pub fn day_candidates<'a>(plan: &'a DietPlan, query: &str) -> Vec<(&'a DayPlan, f64)> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(&DayPlan, f64)> = plan
        .days
        .iter()
        .map(|d| {
            let by_name = jaro_winkler(&d.name.to_lowercase(), &query);
            let by_id = jaro_winkler(&d.id.to_lowercase(), &query);
            (d, by_name.max(by_id))
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a day reference typed by the user to a day id.
///
/// Exact ids and names (case-insensitive) resolve directly; otherwise the
/// user confirms or picks among fuzzy matches. Returns `None` when nothing
/// was chosen.
pub fn prompt_day_choice(plan: &DietPlan, query: &str) -> Result<Option<String>> {
    if let Some(day) = plan.day_by_id(query).or_else(|| plan.day_by_name(query)) {
        return Ok(Some(day.id.clone()));
    }

    let candidates = day_candidates(plan, query);

    if candidates.is_empty() {
        println!("No matching day found for '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let day = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", day.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| day.id.clone()));
    }

    let options: Vec<&DayPlan> = candidates.iter().take(5).map(|(d, _)| *d).collect();
    let mut selection_options: Vec<String> = options.iter().map(|d| d.name.clone()).collect();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).map(|d| d.id.clone()))
}

/// Let the user tick bought items. Returns the keys left checked.
pub fn prompt_checklist(list: &GroupedShoppingList, checklist: &ChecklistState) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    let mut labels = Vec::new();
    let mut defaults = Vec::new();

    for (category, items) in list {
        for item in items {
            let key = item_key(*category, item);
            labels.push(format!("{} - {} ({})", category, item.name, display_quantity(item)));
            defaults.push(checklist.is_checked(&key));
            keys.push(key);
        }
    }

    let selected = MultiSelect::new()
        .with_prompt("Mark bought items (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(selected.into_iter().filter_map(|i| keys.get(i).cloned()).collect())
}

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{WeekPlan, Weekday};
use crate::shopping::categories::{classify, Category};
use crate::shopping::matching::fold_accents;
use crate::shopping::quantity::{format_number, parse_quantity, Amount, ParsedQuantity};
use crate::shopping::names::normalize_name;
use crate::shopping::units::{normalize_unit, units_match};

/// Where an aggregated ingredient is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSource {
    pub day: Weekday,
    pub meal: String,
}

/// One consolidated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedItem {
    /// First-seen original spelling.
    pub name: String,
    /// Grouping key.
    pub normalized_name: String,
    /// Every raw quantity that contributed, in plan order.
    pub quantities: Vec<String>,
    /// Running sum; `None` once any contribution could not be added.
    pub total_quantity: Option<Amount>,
    /// Distinct lowercased spellings, in order of first appearance.
    pub variations: Vec<String>,
    pub sources: Vec<ItemSource>,
}

impl AggregatedItem {
    fn new(name: &str, normalized_name: String, quantity: &str, source: ItemSource) -> Self {
        let total_quantity = parse_quantity(quantity).and_then(|q| q.amount().cloned());
        Self {
            name: name.trim().to_string(),
            normalized_name,
            quantities: vec![quantity.to_string()],
            total_quantity,
            variations: vec![name.trim().to_lowercase()],
            sources: vec![source],
        }
    }

    fn absorb(&mut self, name: &str, quantity: &str, source: ItemSource) {
        self.quantities.push(quantity.to_string());

        let variation = name.trim().to_lowercase();
        if !self.variations.contains(&variation) {
            self.variations.push(variation);
        }

        if !self.sources.contains(&source) {
            self.sources.push(source);
        }

        // A single incompatible contribution poisons the total for good.
        let Some(total) = self.total_quantity.as_mut() else {
            return;
        };
        match parse_quantity(quantity).as_ref().and_then(ParsedQuantity::amount) {
            Some(amount) if units_match(&total.unit, &amount.unit) => total.value += amount.value,
            _ => {
                debug!(
                    "total for '{}' dropped: cannot add '{}' to {} {}",
                    self.normalized_name, quantity, total.value, total.unit
                );
                self.total_quantity = None;
            }
        }
    }
}

/// Shopping list grouped by food group; empty groups are absent.
pub type GroupedShoppingList = BTreeMap<Category, Vec<AggregatedItem>>;

/// Consolidate every ingredient of the week, in plan order.
///
/// Items come back in order of first appearance.
pub fn aggregate_week(plan: &WeekPlan) -> Vec<AggregatedItem> {
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (day, meals) in plan.iter() {
        for meal in meals {
            for ingredient in &meal.ingredients {
                let key = normalize_name(&ingredient.name);
                let source = ItemSource {
                    day,
                    meal: meal.name.clone(),
                };

                match index.get(&key) {
                    Some(&i) => items[i].absorb(&ingredient.name, &ingredient.quantity, source),
                    None => {
                        index.insert(key.clone(), items.len());
                        items.push(AggregatedItem::new(
                            &ingredient.name,
                            key,
                            &ingredient.quantity,
                            source,
                        ));
                    }
                }
            }
        }
    }

    items
}

/// Group aggregated items by food group, sorted by name within each group.
pub fn group_by_category(items: Vec<AggregatedItem>) -> GroupedShoppingList {
    let mut grouped = GroupedShoppingList::new();
    for item in items {
        grouped
            .entry(classify(&item.normalized_name))
            .or_default()
            .push(item);
    }

    for items in grouped.values_mut() {
        items.sort_by(|a, b| {
            fold_accents(&a.name)
                .cmp(&fold_accents(&b.name))
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });
    }

    grouped
}

/// Full recomputation of the grouped shopping list for a week plan.
pub fn build_shopping_list(plan: &WeekPlan) -> GroupedShoppingList {
    let items = aggregate_week(plan);
    debug!(
        "aggregated {} ingredient lines into {} items",
        plan.ingredient_count(),
        items.len()
    );
    group_by_category(items)
}

/// Quantity text for display: per-unit sums, then distinct special values.
///
/// "1 pza", "2 pza", "100 gr", "al gusto" renders as "3 pza, 100 gr, al gusto".
pub fn display_quantity(item: &AggregatedItem) -> String {
    let mut sums: Vec<(String, String, f64)> = Vec::new();
    let mut specials: Vec<String> = Vec::new();

    for raw in &item.quantities {
        match parse_quantity(raw) {
            Some(ParsedQuantity::Amount(amount)) => {
                let unit = normalize_unit(&amount.unit);
                match sums.iter_mut().find(|(u, _, _)| *u == unit) {
                    Some((_, _, sum)) => *sum += amount.value,
                    None => sums.push((unit, amount.unit.trim().to_string(), amount.value)),
                }
            }
            Some(ParsedQuantity::Special(text)) => {
                if !specials.contains(&text) {
                    specials.push(text);
                }
            }
            None => {}
        }
    }

    sums.into_iter()
        .map(|(_, label, sum)| {
            if label.is_empty() {
                format_number(sum)
            } else {
                format!("{} {}", format_number(sum), label)
            }
        })
        .chain(specials)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Meal};

    fn week_with(day: Weekday, ingredients: Vec<Ingredient>) -> WeekPlan {
        let mut plan = WeekPlan::new();
        plan.set_day(day, vec![Meal::new("m1", "Desayuno", ingredients)]);
        plan
    }

    #[test]
    fn test_same_unit_sums() {
        let plan = week_with(
            Weekday::Monday,
            vec![Ingredient::new("Manzana", "1 pza"), Ingredient::new("Manzana", "2 pza")],
        );
        let items = aggregate_week(&plan);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].normalized_name, "manzana");
        assert_eq!(items[0].total_quantity, Some(Amount::new(3.0, "pza")));
        assert_eq!(items[0].quantities, vec!["1 pza", "2 pza"]);
    }

    #[test]
    fn test_unit_spellings_sum_together() {
        let plan = week_with(
            Weekday::Monday,
            vec![Ingredient::new("Avena", "1/2 taza"), Ingredient::new("avena", "1 tza")],
        );
        let items = aggregate_week(&plan);
        assert_eq!(items[0].total_quantity.as_ref().unwrap().value, 1.5);
        assert_eq!(items[0].total_quantity.as_ref().unwrap().unit, "taza");
    }

    #[test]
    fn test_mismatch_poisons_permanently() {
        let plan = week_with(
            Weekday::Monday,
            vec![
                Ingredient::new("Sal", "1 cda"),
                Ingredient::new("sal", "200 gr"),
                Ingredient::new("Sal", "1 cda"),
            ],
        );
        let items = aggregate_week(&plan);

        assert_eq!(items.len(), 1);
        assert!(items[0].total_quantity.is_none());
        assert_eq!(items[0].quantities.len(), 3);
        assert_eq!(items[0].variations, vec!["sal"]);
    }

    #[test]
    fn test_special_first_contribution_has_no_total() {
        let plan = week_with(
            Weekday::Monday,
            vec![Ingredient::new("Pimienta", "al gusto"), Ingredient::new("Pimienta", "1 cdta")],
        );
        let items = aggregate_week(&plan);
        assert!(items[0].total_quantity.is_none());
    }

    #[test]
    fn test_variations_and_sources() {
        let mut plan = WeekPlan::new();
        plan.set_day(
            Weekday::Monday,
            vec![Meal::new("m1", "Comida", vec![Ingredient::new("Cebolla picada", "1/2 pza")])],
        );
        plan.set_day(
            Weekday::Wednesday,
            vec![Meal::new("m2", "Cena", vec![Ingredient::new("Cebolla", "1 pza")])],
        );

        let items = aggregate_week(&plan);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Cebolla picada");
        assert_eq!(items[0].variations, vec!["cebolla picada", "cebolla"]);
        assert_eq!(items[0].sources.len(), 2);
        assert_eq!(items[0].sources[1].day, Weekday::Wednesday);
        assert_eq!(items[0].total_quantity, Some(Amount::new(1.5, "pza")));
    }

    #[test]
    fn test_grouping_sorted_and_empty_groups_absent() {
        let plan = week_with(
            Weekday::Tuesday,
            vec![
                Ingredient::new("Naranja", "1 pza"),
                Ingredient::new("Fresas", "1 taza"),
                Ingredient::new("Sal", "al gusto"),
            ],
        );
        let grouped = build_shopping_list(&plan);

        assert_eq!(grouped.len(), 2);
        let fruits: Vec<&str> = grouped[&Category::Fruits].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(fruits, vec!["Fresas", "Naranja"]);
        assert!(grouped.contains_key(&Category::Other));
        assert!(!grouped.contains_key(&Category::Vegetables));
    }

    #[test]
    fn test_accented_names_sort_alphabetically() {
        let plan = week_with(
            Weekday::Monday,
            vec![
                Ingredient::new("Vinagre", "1 cda"),
                Ingredient::new("Ácido cítrico", "1 cdta"),
                Ingredient::new("Miel", "1 cda"),
            ],
        );
        let grouped = build_shopping_list(&plan);

        let other: Vec<&str> = grouped[&Category::Other].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(other, vec!["Ácido cítrico", "Miel", "Vinagre"]);
    }

    #[test]
    fn test_display_quantity() {
        let plan = week_with(
            Weekday::Monday,
            vec![
                Ingredient::new("Ajo", "1 pza"),
                Ingredient::new("Ajo", "al gusto"),
                Ingredient::new("Ajo", "2 piezas"),
                Ingredient::new("Ajo", "10 gr"),
                Ingredient::new("Ajo", "Al gusto"),
            ],
        );
        let items = aggregate_week(&plan);
        assert_eq!(display_quantity(&items[0]), "3 pza, 10 gr, al gusto");
    }
}

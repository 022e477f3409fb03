use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::shopping::aggregation::{AggregatedItem, GroupedShoppingList};
use crate::shopping::constants::*;
use crate::shopping::matching::first_substring;
use crate::shopping::quantity::{format_number, is_non_quantifiable};
use crate::shopping::units::normalize_unit;

pub const NOT_QUANTIFIABLE: &str = "no cuantificable";
pub const PRICE_UNAVAILABLE: &str = "precio no disponible";

/// Reference price for one ingredient, per pricing unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub name: String,
    pub price: f64,
    pub unit: String,
}

/// Ordered reference price table. Lookup order matters for approximate matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    entries: Vec<PriceEntry>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            entries: PRICE_TABLE
                .iter()
                .map(|(name, price, unit)| PriceEntry {
                    name: name.to_string(),
                    price: *price,
                    unit: unit.to_string(),
                })
                .collect(),
        }
    }
}

impl PriceTable {
    /// Load a table from a JSON array of `{name, price, unit}` records.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut table: PriceTable = serde_json::from_str(&content)?;
        for entry in &mut table.entries {
            entry.name = entry.name.trim().to_lowercase();
        }
        Ok(table)
    }

    /// Exact name first, then the first entry where either name contains the other.
    pub fn lookup(&self, name: &str) -> Option<&PriceEntry> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|e| e.name == wanted)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| wanted.contains(&e.name) || e.name.contains(&wanted))
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Estimated cost of one shopping item with the arithmetic behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub price: Option<f64>,
    pub explanation: String,
}

impl PriceEstimate {
    fn unpriced(explanation: impl Into<String>) -> Self {
        Self {
            price: None,
            explanation: explanation.into(),
        }
    }
}

/// Estimates for a whole shopping list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEstimate {
    /// Estimates keyed by item normalized name.
    pub items: Vec<(String, PriceEstimate)>,
    /// Sum of all known prices, rounded to cents.
    pub total: f64,
    /// Items without a price.
    pub unpriced: usize,
}

impl ListEstimate {
    pub fn get(&self, normalized_name: &str) -> Option<&PriceEstimate> {
        self.items
            .iter()
            .find(|(name, _)| name == normalized_name)
            .map(|(_, estimate)| estimate)
    }
}

/// Heuristic price estimator over a reference table.
#[derive(Debug, Clone)]
pub struct PriceEstimator {
    table: PriceTable,
    currency: String,
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new(PriceTable::default(), DEFAULT_CURRENCY)
    }
}

impl PriceEstimator {
    pub fn new(table: PriceTable, currency: impl Into<String>) -> Self {
        Self {
            table,
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Estimate the cost of an aggregated item.
    pub fn estimate(&self, item: &AggregatedItem) -> PriceEstimate {
        if item.quantities.iter().any(|q| is_non_quantifiable(q)) {
            return PriceEstimate::unpriced(NOT_QUANTIFIABLE);
        }

        let Some(entry) = self.table.lookup(&item.name) else {
            return PriceEstimate::unpriced(PRICE_UNAVAILABLE);
        };

        let Some(total) = item.total_quantity.as_ref() else {
            return PriceEstimate {
                price: Some(round_cents(entry.price)),
                explanation: format!("{:.2} {}/{}", entry.price, self.currency, entry.unit),
            };
        };

        let from = normalize_unit(&total.unit);
        let to = normalize_unit(&entry.unit);
        let Some((amount, detail)) = convert(total.value, &from, &to, &item.name) else {
            debug!("no conversion from '{}' to '{}' for '{}'", from, to, item.name);
            return PriceEstimate::unpriced(format!("sin conversión de {} a {}", unit_label(&from), to));
        };

        let price = round_cents(amount * entry.price);
        PriceEstimate {
            price: Some(price),
            explanation: format!(
                "{} × {:.2} {}/{} = {:.2} {}",
                detail, entry.price, self.currency, entry.unit, price, self.currency
            ),
        }
    }

    /// Estimate every item of a grouped list and total the known prices.
    pub fn estimate_list(&self, list: &GroupedShoppingList) -> ListEstimate {
        let mut estimate = ListEstimate::default();
        for item in list.values().flatten() {
            let item_estimate = self.estimate(item);
            match item_estimate.price {
                Some(price) => estimate.total += price,
                None => estimate.unpriced += 1,
            }
            estimate.items.push((item.normalized_name.clone(), item_estimate));
        }
        estimate.total = round_cents(estimate.total);
        estimate
    }
}

/// Convert `value` in unit `from` to the pricing unit `to`.
///
/// Returns the amount in pricing units and a description of the arithmetic.
fn convert(value: f64, from: &str, to: &str, name: &str) -> Option<(f64, String)> {
    let qty = format_number(value);
    let converted = match (from, to) {
        (UNIT_GRAM, UNIT_KILOGRAM) => {
            let kg = value / 1000.0;
            (kg, format!("{} gr = {} kg", qty, precise(kg)))
        }
        (UNIT_KILOGRAM, UNIT_KILOGRAM) => (value, format!("{} kg", qty)),
        (UNIT_MILLILITER, UNIT_LITER) => {
            let l = value / 1000.0;
            (l, format!("{} ml = {} l", qty, precise(l)))
        }
        (UNIT_LITER, UNIT_LITER) => (value, format!("{} l", qty)),
        (UNIT_PIECE | "", UNIT_PIECE) => (value, format!("{} pza", qty)),
        (UNIT_CUP, UNIT_KILOGRAM) => {
            let kg = value * GRAMS_PER_CUP / 1000.0;
            (
                kg,
                format!("{} tza × {} g ≈ {} kg", qty, format_number(GRAMS_PER_CUP), precise(kg)),
            )
        }
        (UNIT_TABLESPOON, UNIT_KILOGRAM) | (UNIT_TEASPOON, UNIT_KILOGRAM) => {
            let per = spoon_size(from);
            let kg = value * per / 1000.0;
            (
                kg,
                format!("{} {} × {} g ≈ {} kg", qty, from, format_number(per), precise(kg)),
            )
        }
        (UNIT_TABLESPOON, UNIT_LITER) | (UNIT_TEASPOON, UNIT_LITER) => {
            let per = spoon_size(from);
            let l = value * per / 1000.0;
            (
                l,
                format!("{} {} × {} ml ≈ {} l", qty, from, format_number(per), precise(l)),
            )
        }
        (UNIT_PIECE | "", UNIT_KILOGRAM) => {
            let grams = piece_weight(name);
            let kg = value * grams / 1000.0;
            (
                kg,
                format!("{} pza × {} g ≈ {} kg", qty, format_number(grams), precise(kg)),
            )
        }
        _ => return None,
    };
    Some(converted)
}

fn spoon_size(unit: &str) -> f64 {
    if unit == UNIT_TABLESPOON {
        GRAMS_PER_TABLESPOON
    } else {
        GRAMS_PER_TEASPOON
    }
}

/// Approximate grams per piece for an ingredient name.
pub fn piece_weight(name: &str) -> f64 {
    first_substring(PIECE_WEIGHTS, &name.trim().to_lowercase()).unwrap_or(DEFAULT_PIECE_GRAMS)
}

/// Up to three decimals, for converted weights and volumes.
fn precise(value: f64) -> String {
    let text = format!("{:.3}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn unit_label(unit: &str) -> &str {
    if unit.is_empty() { "(sin unidad)" } else { unit }
}

/// Round to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopping::quantity::Amount;
    use assert_float_eq::*;

    fn item(name: &str, quantities: &[&str], total: Option<Amount>) -> AggregatedItem {
        AggregatedItem {
            name: name.to_string(),
            normalized_name: name.to_lowercase(),
            quantities: quantities.iter().map(|q| q.to_string()).collect(),
            total_quantity: total,
            variations: vec![name.to_lowercase()],
            sources: vec![],
        }
    }

    #[test]
    fn test_lookup_exact_then_substring() {
        let table = PriceTable::default();
        assert_eq!(table.lookup("Pollo").unwrap().name, "pollo");
        assert_eq!(table.lookup("pechuga de pollo asada").unwrap().name, "pechuga de pollo");
        // table key contains the item name
        assert_eq!(table.lookup("oliva").unwrap().name, "aceite de oliva");
        assert!(table.lookup("canela").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_non_quantifiable_short_circuits() {
        let estimator = PriceEstimator::default();
        let estimate = estimator.estimate(&item("Sal", &["1 pizca"], Some(Amount::new(1.0, "pizca"))));
        assert_eq!(estimate.price, None);
        assert_eq!(estimate.explanation, NOT_QUANTIFIABLE);

        let estimate = estimator.estimate(&item("Canela", &["al gusto"], None));
        assert_eq!(estimate.explanation, NOT_QUANTIFIABLE);
    }

    #[test]
    fn test_price_unavailable() {
        let estimator = PriceEstimator::default();
        let estimate = estimator.estimate(&item("Canela", &["1 raja"], Some(Amount::new(1.0, "raja"))));
        assert_eq!(estimate.price, None);
        assert_eq!(estimate.explanation, PRICE_UNAVAILABLE);
    }

    #[test]
    fn test_flat_price_without_total() {
        let estimator = PriceEstimator::default();
        let estimate = estimator.estimate(&item("Arroz", &["1 taza", "100 gr"], None));
        assert_eq!(estimate.price, Some(30.0));
        assert_eq!(estimate.explanation, "30.00 MXN/kg");
    }

    #[test]
    fn test_grams_to_kilograms() {
        let estimator = PriceEstimator::default();
        let estimate =
            estimator.estimate(&item("Pechuga de pollo", &["250 gr"], Some(Amount::new(250.0, "gr"))));
        assert_float_absolute_eq!(estimate.price.unwrap(), 35.0, 1e-9);
        assert_eq!(estimate.explanation, "250 gr = 0.25 kg × 140.00 MXN/kg = 35.00 MXN");
    }

    #[test]
    fn test_milliliters_to_liters() {
        let estimator = PriceEstimator::default();
        let estimate = estimator.estimate(&item("Leche", &["500 ml"], Some(Amount::new(500.0, "ml"))));
        assert_float_absolute_eq!(estimate.price.unwrap(), 14.0, 1e-9);
    }

    #[test]
    fn test_cup_and_spoons() {
        let estimator = PriceEstimator::default();

        let cup = estimator.estimate(&item("Avena", &["2 tazas"], Some(Amount::new(2.0, "tazas"))));
        assert_float_absolute_eq!(cup.price.unwrap(), 20.0, 1e-9);

        let tbsp = estimator.estimate(&item(
            "Aceite de oliva",
            &["2 cdas"],
            Some(Amount::new(2.0, "cdas")),
        ));
        assert_float_absolute_eq!(tbsp.price.unwrap(), 5.4, 1e-9);

        let tsp = estimator.estimate(&item("Miel", &["1 cdta"], Some(Amount::new(1.0, "cdta"))));
        assert_float_absolute_eq!(tsp.price.unwrap(), 0.6, 1e-9);

        let tbsp_kg = estimator.estimate(&item("Avena", &["1 cda"], Some(Amount::new(1.0, "cda"))));
        assert_float_absolute_eq!(tbsp_kg.price.unwrap(), 0.6, 1e-9);
        assert_eq!(
            tbsp_kg.explanation,
            "1 cda × 15 g ≈ 0.015 kg × 40.00 MXN/kg = 0.60 MXN"
        );

        let tsp_l = estimator.estimate(&item(
            "Aceite de oliva",
            &["1 cdta"],
            Some(Amount::new(1.0, "cdta")),
        ));
        assert_float_absolute_eq!(tsp_l.price.unwrap(), 0.9, 1e-9);
        assert_eq!(
            tsp_l.explanation,
            "1 cdta × 5 ml ≈ 0.005 l × 180.00 MXN/l = 0.90 MXN"
        );
    }

    #[test]
    fn test_same_unit_as_price() {
        let estimator = PriceEstimator::default();

        let kg = estimator.estimate(&item("Arroz", &["2 kg"], Some(Amount::new(2.0, "kg"))));
        assert_float_absolute_eq!(kg.price.unwrap(), 60.0, 1e-9);
        assert_eq!(kg.explanation, "2 kg × 30.00 MXN/kg = 60.00 MXN");

        let liters = estimator.estimate(&item("Leche", &["2 l"], Some(Amount::new(2.0, "l"))));
        assert_float_absolute_eq!(liters.price.unwrap(), 56.0, 1e-9);
        assert_eq!(liters.explanation, "2 l × 28.00 MXN/l = 56.00 MXN");
    }

    #[test]
    fn test_pieces() {
        let estimator = PriceEstimator::default();

        let eggs = estimator.estimate(&item("Huevo", &["2"], Some(Amount::new(2.0, ""))));
        assert_float_absolute_eq!(eggs.price.unwrap(), 7.0, 1e-9);

        let onion = estimator.estimate(&item("Cebolla", &["1 pza"], Some(Amount::new(1.0, "pza"))));
        assert_float_absolute_eq!(onion.price.unwrap(), 5.6, 1e-9);
        assert_eq!(onion.explanation, "1 pza × 200 g ≈ 0.2 kg × 28.00 MXN/kg = 5.60 MXN");

        // no weight entry: 100 g per piece
        let broccoli = estimator.estimate(&item("Brócoli", &["1 pza"], Some(Amount::new(1.0, "pza"))));
        assert_float_absolute_eq!(broccoli.price.unwrap(), 4.5, 1e-9);
    }

    #[test]
    fn test_missing_conversion_rule() {
        let estimator = PriceEstimator::default();
        let estimate = estimator.estimate(&item("Huevo", &["100 gr"], Some(Amount::new(100.0, "gr"))));
        assert_eq!(estimate.price, None);
        assert_eq!(estimate.explanation, "sin conversión de gr a pza");
    }

    #[test]
    fn test_piece_weight_defaults() {
        assert_eq!(piece_weight("Almendra"), 1.0);
        assert_eq!(piece_weight("jitomate saladet"), 150.0);
        assert_eq!(piece_weight("kiwi"), DEFAULT_PIECE_GRAMS);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(0.03 * 180.0), 5.4);
        assert_eq!(round_cents(2.345678), 2.35);
    }
}

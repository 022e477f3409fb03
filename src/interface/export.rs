use std::path::Path;

use crate::error::Result;
use crate::shopping::{display_quantity, item_key, ChecklistState, GroupedShoppingList, PriceEstimator};

/// Write the shopping list to a CSV file. Returns the number of rows written.
pub fn write_shopping_list_csv(
    path: &Path,
    list: &GroupedShoppingList,
    checklist: &ChecklistState,
    estimator: &PriceEstimator,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "item", "quantity", "price", "explanation", "checked"])?;

    let mut rows = 0;
    for (category, items) in list {
        for item in items {
            let estimate = estimator.estimate(item);
            let price = estimate.price.map(|p| format!("{:.2}", p)).unwrap_or_default();
            let checked = checklist.is_checked(&item_key(*category, item));

            wtr.write_record([
                category.as_str().to_string(),
                item.name.clone(),
                display_quantity(item),
                price,
                estimate.explanation,
                checked.to_string(),
            ])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

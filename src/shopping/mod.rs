pub mod aggregation;
pub mod categories;
pub mod checklist;
pub mod constants;
pub mod matching;
pub mod names;
pub mod pricing;
pub mod quantity;
pub mod units;

pub use aggregation::{
    aggregate_week, build_shopping_list, display_quantity, group_by_category, AggregatedItem,
    GroupedShoppingList, ItemSource,
};
pub use categories::{classify, Category};
pub use checklist::{current_keys, item_key, reconcile_checklist, ChecklistState};
pub use names::normalize_name;
pub use pricing::{ListEstimate, PriceEntry, PriceEstimate, PriceEstimator, PriceTable};
pub use quantity::{parse_quantity, Amount, ParsedQuantity};
pub use units::normalize_unit;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::shopping::aggregation::{AggregatedItem, GroupedShoppingList};
use crate::shopping::categories::Category;
use crate::state::{keys, StateStore};

/// Checklist key of an item: `"<category>:<normalized name>"`.
pub fn item_key(category: Category, item: &AggregatedItem) -> String {
    let name = if item.normalized_name.is_empty() {
        &item.name
    } else {
        &item.normalized_name
    };
    format!("{}:{}", category.as_str(), name.to_lowercase())
}

/// Every key present in the list.
pub fn current_keys(list: &GroupedShoppingList) -> BTreeSet<String> {
    list.iter()
        .flat_map(|(category, items)| items.iter().map(|item| item_key(*category, item)))
        .collect()
}

/// Persisted "checked" flags of the shopping list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    items: BTreeMap<String, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.items.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, checked: bool) {
        self.items.insert(key.into(), checked);
    }

    /// Flip a key and return its new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let checked = !self.is_checked(key);
        self.set(key, checked);
        checked
    }

    /// Drop every key not in `valid`. Returns whether anything was removed.
    pub fn prune(&mut self, valid: &BTreeSet<String>) -> bool {
        let before = self.items.len();
        self.items.retain(|key, _| valid.contains(key));
        let removed = before - self.items.len();
        if removed > 0 {
            debug!("pruned {} stale checklist entries", removed);
        }
        removed > 0
    }

    /// Mark every given key as checked.
    pub fn check_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a String>) {
        for key in keys {
            self.items.insert(key.clone(), true);
        }
    }

    /// Forget every entry, including keys not in the current list.
    pub fn uncheck_all(&mut self) {
        self.items.clear();
    }

    /// Checked keys among `keys`.
    pub fn checked_count(&self, keys: &BTreeSet<String>) -> usize {
        keys.iter().filter(|k| self.is_checked(k)).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reconcile persisted checklist state with a freshly built list.
///
/// Stale keys are removed; the store is written only when something changed.
/// Write failures are logged and do not abort the regeneration.
pub fn reconcile_checklist<S: StateStore>(
    store: &mut S,
    state: &mut ChecklistState,
    list: &GroupedShoppingList,
) -> bool {
    let valid = current_keys(list);
    let changed = state.prune(&valid);

    if changed {
        if let Err(e) = store.save(keys::CHECKED_ITEMS, &*state) {
            warn!("failed to persist checklist: {}", e);
        }
    }

    changed
}

//! One meal of a mix-and-match combo.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::menu::ComboCategory;

/// Result of assigning a quantity inside a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOutcome {
    /// Quantity the caller asked for.
    pub requested: u32,
    /// Quantity actually stored.
    pub applied: u32,
    /// True if the category cap reduced the request.
    pub clamped: bool,
}

/// Item quantities chosen for one meal, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealSelection {
    items: BTreeMap<ComboCategory, BTreeMap<String, u32>>,
}

impl MealSelection {
    /// Empty meal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected quantities per category.
    #[must_use]
    pub const fn items(&self) -> &BTreeMap<ComboCategory, BTreeMap<String, u32>> {
        &self.items
    }

    /// Quantity of one item.
    #[must_use]
    pub fn quantity(&self, category: ComboCategory, item: &str) -> u32 {
        self.items
            .get(&category)
            .and_then(|entries| entries.get(item))
            .copied()
            .unwrap_or(0)
    }

    /// Total quantity chosen in a category, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self, category: ComboCategory) -> u32 {
        self.items.get(&category).map_or(0, |entries| {
            entries
                .values()
                .fold(0u32, |total, quantity| total.saturating_add(*quantity))
        })
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.values().all(BTreeMap::is_empty)
    }

    /// Set an item's quantity without checking any cap.
    ///
    /// Used when rebuilding a meal from stored selections; the limit
    /// validator reports anything over the cap.
    pub fn set(&mut self, category: ComboCategory, item: &str, quantity: u32) {
        if quantity == 0 {
            if let Some(entries) = self.items.get_mut(&category) {
                entries.remove(item);
                if entries.is_empty() {
                    self.items.remove(&category);
                }
            }
        } else {
            self.items
                .entry(category)
                .or_default()
                .insert(item.to_string(), quantity);
        }
    }

    /// Set an item's quantity, clamped so the category total stays within `cap`.
    ///
    /// A cap of 0 means uncapped. The stored value is
    /// `min(quantity, cap - others)` where `others` is the rest of the
    /// category; a result of 0 removes the item.
    pub fn assign(
        &mut self,
        category: ComboCategory,
        item: &str,
        quantity: u32,
        cap: u32,
    ) -> AssignOutcome {
        let others = self
            .total(category)
            .saturating_sub(self.quantity(category, item));
        let applied = if cap > 0 {
            quantity.min(cap.saturating_sub(others))
        } else {
            quantity
        };
        self.set(category, item, applied);
        AssignOutcome {
            requested: quantity,
            applied,
            clamped: applied < quantity,
        }
    }
}

//! Order Aggregate Root
//!
//! Customer selections against one menu: normal items per category, combos,
//! named discounts in application order, and an optional custom discount.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::menu::{ComboCategory, MenuDocument};
use crate::domain::order::errors::OrderError;
use crate::domain::order::value_objects::{AssignOutcome, ComboOrder, MealSelection};
use crate::domain::shared::{name_key, names_match};

/// Category used for items the menu does not know.
pub const FALLBACK_CATEGORY: &str = "food";

/// An order being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    items: BTreeMap<String, BTreeMap<String, u32>>,
    combos: BTreeMap<String, ComboOrder>,
    discounts_applied: Vec<String>,
    custom_discount: Option<Decimal>,
}

impl Order {
    /// Empty order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normal items: category to item to quantity.
    #[must_use]
    pub const fn items(&self) -> &BTreeMap<String, BTreeMap<String, u32>> {
        &self.items
    }

    /// Normal item lines as `(category, item, quantity)`.
    pub fn item_lines(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.items.iter().flat_map(|(category, entries)| {
            entries
                .iter()
                .map(move |(item, qty)| (category.as_str(), item.as_str(), *qty))
        })
    }

    /// Ordered combos.
    #[must_use]
    pub const fn combos(&self) -> &BTreeMap<String, ComboOrder> {
        &self.combos
    }

    /// Named discounts, in the order they were applied.
    #[must_use]
    pub fn discounts_applied(&self) -> &[String] {
        &self.discounts_applied
    }

    /// Custom discount percent, if enabled. Clamped when priced, not here.
    #[must_use]
    pub const fn custom_discount(&self) -> Option<Decimal> {
        self.custom_discount
    }

    /// Returns true when no item or combo is ordered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.values().all(BTreeMap::is_empty) && self.combos.is_empty()
    }

    /// Set a normal item's quantity under an explicit category; 0 removes it.
    pub fn set_item(&mut self, category: &str, item: &str, quantity: u32) {
        let category = name_key(category);
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

    /// Set a normal item's quantity, resolving its name and category on `menu`.
    ///
    /// Unknown items keep the name as given and fall into `food`. Returns the
    /// name stored on the order.
    pub fn add_item(&mut self, menu: &MenuDocument, name: &str, quantity: u32) -> String {
        let name = name.trim();
        let (canonical, category) = menu.item(name).map_or_else(
            || (name.to_string(), FALLBACK_CATEGORY.to_string()),
            |item| (item.name.clone(), item.category()),
        );
        self.set_item(&category, &canonical, quantity);
        canonical
    }

    /// Set the number of fixed combo units; 0 removes the combo.
    pub fn set_fixed_combo(&mut self, name: &str, quantity: u32) {
        let key = self.combo_key(name);
        if quantity == 0 {
            self.combos.remove(&key);
        } else {
            self.combos.insert(key, ComboOrder::Fixed { quantity });
        }
    }

    /// Set the number of mix-and-match meals, keeping existing selections.
    ///
    /// New meals start empty; 0 removes the combo.
    pub fn set_meal_count(&mut self, name: &str, meals: usize) {
        let key = self.combo_key(name);
        if meals == 0 {
            self.combos.remove(&key);
            return;
        }
        let entry = self
            .combos
            .entry(key)
            .or_insert_with(|| ComboOrder::MixAndMatch { meals: Vec::new() });
        match entry {
            ComboOrder::MixAndMatch { meals: current } => {
                current.resize_with(meals, MealSelection::new);
            }
            ComboOrder::Fixed { .. } => {
                *entry = ComboOrder::MixAndMatch {
                    meals: vec![MealSelection::new(); meals],
                };
            }
        }
    }

    /// Choose a quantity of an item for one meal of a mix-and-match combo.
    ///
    /// The quantity is clamped so the meal's category total stays within the
    /// combo's cap; the outcome says whether that happened.
    ///
    /// # Errors
    ///
    /// Unknown or fixed combo, ineligible item, or a meal that was not ordered.
    pub fn assign_meal_item(
        &mut self,
        menu: &MenuDocument,
        combo: &str,
        meal: usize,
        category: ComboCategory,
        item: &str,
        quantity: u32,
    ) -> Result<AssignOutcome, OrderError> {
        let (combo_name, definition) =
            menu.combo(combo.trim()).ok_or_else(|| OrderError::UnknownCombo {
                combo: combo.to_string(),
            })?;
        if !definition.is_mix_and_match() {
            return Err(OrderError::NotMixAndMatch {
                combo: combo_name.to_string(),
            });
        }
        let item_name = definition
            .eligible_item(category, item.trim())
            .ok_or_else(|| OrderError::ItemNotEligible {
                combo: combo_name.to_string(),
                category,
                item: item.to_string(),
            })?;
        let cap = definition.limit(category);

        let key = self.combo_key(combo_name);
        let meals = match self.combos.get_mut(&key) {
            Some(ComboOrder::MixAndMatch { meals }) => meals,
            _ => {
                return Err(OrderError::MealOutOfRange {
                    combo: combo_name.to_string(),
                    meal,
                    meals: 0,
                });
            }
        };
        let count = meals.len();
        let selection = meals.get_mut(meal).ok_or_else(|| OrderError::MealOutOfRange {
            combo: combo_name.to_string(),
            meal,
            meals: count,
        })?;
        Ok(selection.assign(category, item_name, quantity, cap))
    }

    /// Insert a combo entry as-is.
    pub fn set_combo(&mut self, name: &str, combo: ComboOrder) {
        let key = self.combo_key(name);
        self.combos.insert(key, combo);
    }

    /// Turn a named discount on or off, keeping application order.
    pub fn toggle_discount(&mut self, name: &str, on: bool) {
        let name = name.trim();
        let present = self.discounts_applied.iter().any(|d| names_match(d, name));
        if on && !present {
            self.discounts_applied.push(name.to_string());
        } else if !on {
            self.discounts_applied.retain(|d| !names_match(d, name));
        }
    }

    /// Enable (`Some`) or disable (`None`) the custom discount percent.
    pub const fn set_custom_discount(&mut self, percent: Option<Decimal>) {
        self.custom_discount = percent;
    }

    /// Reset to an empty order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Existing key for a combo ignoring case, or the trimmed name.
    fn combo_key(&self, name: &str) -> String {
        let name = name.trim();
        self.combos
            .keys()
            .find(|k| names_match(k, name))
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

//! Price table for a menu.

use std::collections::BTreeMap;

use crate::domain::shared::{Money, name_key, names_match};

/// Reserved price keys holding per-category default prices.
pub const CATEGORY_DEFAULT_KEYS: [&str; 4] = ["food", "drinks", "desserts", "animal_treat"];

/// Built-in fallback when a category default is not set on the menu.
fn builtin_category_default(key: &str) -> Option<Money> {
    let units = match key {
        "food" => 10,
        "drinks" => 7,
        "desserts" => 5,
        "animal_treat" => 3,
        _ => return None,
    };
    Some(Money::whole(units))
}

/// Maps a section or category name onto its reserved default key.
fn category_default_key(category: &str) -> Option<&'static str> {
    let key = name_key(category.trim());
    let key = if key == "animal_treats" { "animal_treat" } else { key.as_str() };
    CATEGORY_DEFAULT_KEYS.into_iter().find(|k| *k == key)
}

/// Item prices, category defaults and combo prices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceList {
    items: BTreeMap<String, Money>,
    category_defaults: BTreeMap<String, Money>,
    combos: BTreeMap<String, Money>,
}

impl PriceList {
    /// Empty price list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Price list written for a new establishment.
    #[must_use]
    pub fn starter() -> Self {
        let mut prices = Self::new();
        for key in ["food", "drinks", "animal_treat"] {
            if let Some(price) = builtin_category_default(key) {
                prices.category_defaults.insert(key.to_string(), price);
            }
        }
        prices
    }

    /// Returns true if `key` names a category default rather than an item.
    #[must_use]
    pub fn is_category_default_key(key: &str) -> bool {
        CATEGORY_DEFAULT_KEYS.iter().any(|k| names_match(k, key))
    }

    /// Explicit item prices.
    #[must_use]
    pub const fn items(&self) -> &BTreeMap<String, Money> {
        &self.items
    }

    /// Category defaults set on the menu.
    #[must_use]
    pub const fn category_defaults(&self) -> &BTreeMap<String, Money> {
        &self.category_defaults
    }

    /// Combo prices.
    #[must_use]
    pub const fn combos(&self) -> &BTreeMap<String, Money> {
        &self.combos
    }

    /// Explicit price for `name`: exact key first, then ignoring case.
    ///
    /// Category default keys are matched too, so an item literally named
    /// "food" resolves to the food default.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Money> {
        self.items
            .get(name)
            .or_else(|| self.category_defaults.get(name))
            .or_else(|| find_ignoring_case(&self.items, name))
            .or_else(|| find_ignoring_case(&self.category_defaults, name))
            .copied()
    }

    /// Price of a combo, exact key first, then ignoring case.
    #[must_use]
    pub fn combo_price(&self, name: &str) -> Option<Money> {
        self.combos
            .get(name)
            .or_else(|| find_ignoring_case(&self.combos, name))
            .copied()
    }

    /// Default price for a category, falling back to the built-in defaults.
    ///
    /// Returns `None` for categories without a default (custom sections).
    #[must_use]
    pub fn category_default(&self, category: &str) -> Option<Money> {
        let key = category_default_key(category)?;
        find_ignoring_case(&self.category_defaults, key)
            .copied()
            .or_else(|| builtin_category_default(key))
    }

    /// Set an item price, or a category default when `key` is reserved.
    ///
    /// A category default already stored under another casing keeps its key.
    pub(crate) fn set(&mut self, key: &str, price: Money) {
        if Self::is_category_default_key(key) {
            let stored = self
                .category_defaults
                .keys()
                .find(|k| names_match(k, key))
                .cloned()
                .unwrap_or_else(|| key.to_string());
            self.category_defaults.insert(stored, price);
        } else {
            self.items.insert(key.to_string(), price);
        }
    }

    pub(crate) fn remove_item(&mut self, name: &str) -> Option<Money> {
        self.items.remove(name)
    }

    pub(crate) fn set_combo(&mut self, name: &str, price: Money) {
        self.combos.insert(name.to_string(), price);
    }

    pub(crate) fn remove_combo(&mut self, name: &str) -> Option<Money> {
        self.combos.remove(name)
    }
}

fn find_ignoring_case<'a>(map: &'a BTreeMap<String, Money>, name: &str) -> Option<&'a Money> {
    let key = name_key(name);
    map.iter()
        .find(|(k, _)| name_key(k) == key)
        .map(|(_, price)| price)
}

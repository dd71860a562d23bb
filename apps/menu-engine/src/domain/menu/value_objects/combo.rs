//! Combo definitions.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, names_match};

/// Category slots a combo draws items from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboCategory {
    /// Food items.
    Food,
    /// Drinks.
    Drinks,
    /// Desserts.
    Desserts,
}

impl ComboCategory {
    /// All categories in definition order.
    pub const ALL: [Self; 3] = [Self::Food, Self::Drinks, Self::Desserts];

    /// Order used when printing a meal breakdown.
    pub const SUMMARY_ORDER: [Self; 3] = [Self::Drinks, Self::Food, Self::Desserts];

    /// Lowercase key as stored in menu documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drinks => "drinks",
            Self::Desserts => "desserts",
        }
    }

    /// Heading used in summaries ("Food", "Drinks", "Desserts").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Drinks => "Drinks",
            Self::Desserts => "Desserts",
        }
    }

    /// Parse a category name, ignoring case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| names_match(c.as_str(), name.trim()))
    }
}

impl fmt::Display for ComboCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a combo's contents are determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboModel {
    /// Predetermined quantity of each item per combo unit.
    Fixed {
        /// Item quantities per category.
        items: BTreeMap<ComboCategory, BTreeMap<String, u32>>,
    },
    /// Customer picks items per meal from eligible sets, up to a cap per category.
    MixAndMatch {
        /// Eligible items per category.
        eligible: BTreeMap<ComboCategory, BTreeSet<String>>,
        /// Cap per category and meal; 0 means uncapped.
        limits: BTreeMap<ComboCategory, u32>,
    },
}

impl ComboModel {
    /// Fixed combo with no items.
    #[must_use]
    pub const fn empty_fixed() -> Self {
        Self::Fixed {
            items: BTreeMap::new(),
        }
    }

    /// Mix-and-match combo with no eligible items and zero caps.
    #[must_use]
    pub fn empty_mix_and_match() -> Self {
        Self::MixAndMatch {
            eligible: BTreeMap::new(),
            limits: ComboCategory::ALL.into_iter().map(|c| (c, 0)).collect(),
        }
    }
}

/// A combo as defined on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboDefinition {
    price: Money,
    model: ComboModel,
}

impl ComboDefinition {
    /// Create a combo definition.
    #[must_use]
    pub const fn new(price: Money, model: ComboModel) -> Self {
        Self { price, model }
    }

    /// Price of one combo unit (or one meal).
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Combo model.
    #[must_use]
    pub const fn model(&self) -> &ComboModel {
        &self.model
    }

    pub(crate) const fn model_mut(&mut self) -> &mut ComboModel {
        &mut self.model
    }

    pub(crate) const fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    /// Returns true for mix-and-match combos.
    #[must_use]
    pub const fn is_mix_and_match(&self) -> bool {
        matches!(self.model, ComboModel::MixAndMatch { .. })
    }

    /// Per-meal cap for a category; 0 (uncapped) for fixed combos and unset categories.
    #[must_use]
    pub fn limit(&self, category: ComboCategory) -> u32 {
        match &self.model {
            ComboModel::MixAndMatch { limits, .. } => limits.get(&category).copied().unwrap_or(0),
            ComboModel::Fixed { .. } => 0,
        }
    }

    /// Canonical eligible item matching `item` case-insensitively.
    #[must_use]
    pub fn eligible_item(&self, category: ComboCategory, item: &str) -> Option<&str> {
        match &self.model {
            ComboModel::MixAndMatch { eligible, .. } => eligible
                .get(&category)?
                .iter()
                .map(String::as_str)
                .find(|e| names_match(e, item)),
            ComboModel::Fixed { .. } => None,
        }
    }

    /// Fixed contents as `(category, item, quantity per unit)`; empty for mix-and-match.
    pub fn fixed_items(&self) -> impl Iterator<Item = (ComboCategory, &str, u32)> {
        let items = match &self.model {
            ComboModel::Fixed { items } => Some(items),
            ComboModel::MixAndMatch { .. } => None,
        };
        items.into_iter().flat_map(|by_cat| {
            by_cat.iter().flat_map(|(cat, entries)| {
                entries.iter().map(move |(name, qty)| (*cat, name.as_str(), *qty))
            })
        })
    }

    /// Returns true if `item` appears anywhere in this combo.
    #[must_use]
    pub fn references_item(&self, item: &str) -> bool {
        match &self.model {
            ComboModel::Fixed { items } => items.values().any(|e| e.contains_key(item)),
            ComboModel::MixAndMatch { eligible, .. } => {
                eligible.values().any(|e| e.contains(item))
            }
        }
    }

    /// Drop `item` from the combo's contents.
    pub(crate) fn remove_item(&mut self, item: &str) {
        match &mut self.model {
            ComboModel::Fixed { items } => {
                for entries in items.values_mut() {
                    entries.remove(item);
                }
            }
            ComboModel::MixAndMatch { eligible, .. } => {
                for entries in eligible.values_mut() {
                    entries.remove(item);
                }
            }
        }
    }
}

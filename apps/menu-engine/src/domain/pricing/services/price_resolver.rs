//! Price Resolver
//!
//! Resolves a unit price through a fixed fallback chain:
//!
//! 1. exact key in the price table
//! 2. the same key ignoring case
//! 3. for the `combos` category, the combo price table
//! 4. otherwise the category default (menu value, else 10/7/5/3)
//! 5. zero
//!
//! An unresolvable name is never an error.

use crate::domain::menu::{COMBOS_SECTION, MenuDocument};
use crate::domain::shared::{Money, names_match};

/// Resolves unit prices against one menu.
#[derive(Debug, Clone, Copy)]
pub struct PriceResolver<'a> {
    menu: &'a MenuDocument,
}

impl<'a> PriceResolver<'a> {
    /// Create a resolver for a menu.
    #[must_use]
    pub const fn new(menu: &'a MenuDocument) -> Self {
        Self { menu }
    }

    /// Unit price of `name` in `category`.
    #[must_use]
    pub fn resolve(&self, name: &str, category: Option<&str>) -> Money {
        let prices = self.menu.prices();
        if let Some(price) = prices.lookup(name) {
            return price;
        }
        match category {
            Some(category) if names_match(category, COMBOS_SECTION) => {
                prices.combo_price(name).unwrap_or(Money::ZERO)
            }
            Some(category) => prices.category_default(category).unwrap_or(Money::ZERO),
            None => Money::ZERO,
        }
    }

    /// Price of one combo unit: the definition's price, else the combo price
    /// table, else zero.
    #[must_use]
    pub fn combo_unit_price(&self, name: &str) -> Money {
        self.menu
            .combo(name)
            .map(|(_, definition)| definition.price())
            .or_else(|| self.menu.prices().combo_price(name))
            .unwrap_or(Money::ZERO)
    }
}

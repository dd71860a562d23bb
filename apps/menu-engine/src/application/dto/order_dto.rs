//! Order input DTO
//!
//! JSON shape for an order handed to the engine from outside, e.g.
//!
//! ```json
//! {
//!   "items": { "Burger": 2 },
//!   "combos": {
//!     "Classic": { "quantity": 1 },
//!     "Lunch": { "meals": [ { "food": { "Fries": 1 } } ] }
//!   },
//!   "discounts": ["Staff"],
//!   "custom_discount_percent": 10
//! }
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::menu::MenuDocument;
use crate::domain::order::{MealSelection, Order, OrderError};

/// A combo entry of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOrderDto {
    /// Units of a fixed combo, or number of meals when `meals` is empty.
    #[serde(default)]
    pub quantity: u32,
    /// Per-meal selections of a mix-and-match combo.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meals: Vec<MealSelection>,
}

/// An order as received from outside the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// Item name to quantity; categories come from the menu.
    #[serde(default)]
    pub items: BTreeMap<String, u32>,
    /// Combo name to combo entry.
    #[serde(default)]
    pub combos: BTreeMap<String, ComboOrderDto>,
    /// Discount names in application order.
    #[serde(default)]
    pub discounts: Vec<String>,
    /// Custom discount percent; clamped to `[0, 100]` when priced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_discount_percent: Option<Decimal>,
}

impl OrderDto {
    /// Build an order against `menu`.
    ///
    /// Meal selections go through the same clamping as interactive edits;
    /// clamps are logged. Combos the menu does not know are kept as fixed
    /// combos and price at zero.
    ///
    /// # Errors
    ///
    /// Returns error if a meal selects an item the combo does not offer.
    pub fn into_order(self, menu: &MenuDocument) -> Result<Order, OrderError> {
        let mut order = Order::new();
        for (item, quantity) in &self.items {
            order.add_item(menu, item, *quantity);
        }

        for (name, combo) in self.combos {
            let mix_and_match = menu
                .combo(&name)
                .is_some_and(|(_, definition)| definition.is_mix_and_match());
            if !mix_and_match {
                order.set_fixed_combo(&name, combo.quantity);
                continue;
            }
            let meal_count = if combo.meals.is_empty() {
                usize::try_from(combo.quantity).unwrap_or(usize::MAX)
            } else {
                combo.meals.len()
            };
            order.set_meal_count(&name, meal_count);
            for (index, meal) in combo.meals.iter().enumerate() {
                for (category, items) in meal.items() {
                    for (item, quantity) in items {
                        let outcome =
                            order.assign_meal_item(menu, &name, index, *category, item, *quantity)?;
                        if outcome.clamped {
                            warn!(
                                combo = %name,
                                meal = index + 1,
                                item = %item,
                                requested = outcome.requested,
                                applied = outcome.applied,
                                "Meal selection clamped to category limit"
                            );
                        }
                    }
                }
            }
        }

        for discount in &self.discounts {
            order.toggle_discount(discount, true);
        }
        order.set_custom_discount(self.custom_discount_percent);
        Ok(order)
    }
}

//! Pricing Bounded Context
//!
//! Pure functions of `(order, menu)`: price resolution, combo expansion and
//! order totals. Nothing here keeps state between calls.

pub mod services;
pub mod value_objects;

pub use services::{CUSTOM_DISCOUNT, ComboExpander, OrderPricingService, PriceResolver};
pub use value_objects::{ComboExpansion, Contribution, DiscountStep, LineCost, LineKind, PriceBreakdown};

use crate::domain::menu::{ComboDefinition, MenuDocument};
use crate::domain::order::{ComboOrder, Order};
use crate::domain::shared::Money;

/// Unit price of `name`, falling back through category defaults to zero.
#[must_use]
pub fn resolve_price(name: &str, category: Option<&str>, menu: &MenuDocument) -> Money {
    PriceResolver::new(menu).resolve(name, category)
}

/// Flatten a combo selection into item contributions and a unit price.
#[must_use]
pub fn expand(name: &str, definition: &ComboDefinition, selection: &ComboOrder) -> ComboExpansion {
    ComboExpander::expand(name, definition, selection)
}

/// Order total after discounts, never negative.
#[must_use]
pub fn price(order: &Order, menu: &MenuDocument) -> Money {
    OrderPricingService::new(menu).price(order)
}

//! Order Pricing Service
//!
//! Computes an order total:
//!
//! 1. normal lines at their resolved unit price
//! 2. combos at their flat unit price times units
//! 3. named discounts in application order
//! 4. the custom discount, last
//!
//! Each named discount works out its discountable amount from the original
//! line costs (everything not in its bypass set) and subtracts
//! `discountable * rate` from the running total. Only that subtraction
//! compounds; the line costs never shrink.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{ComboExpander, PriceResolver};
use crate::domain::menu::MenuDocument;
use crate::domain::order::Order;
use crate::domain::pricing::value_objects::{DiscountStep, LineCost, LineKind, PriceBreakdown};
use crate::domain::shared::{Money, Percent};

/// Label used for the custom discount step.
pub const CUSTOM_DISCOUNT: &str = "Custom";

/// Prices orders against one menu.
#[derive(Debug, Clone, Copy)]
pub struct OrderPricingService<'a> {
    menu: &'a MenuDocument,
}

impl<'a> OrderPricingService<'a> {
    /// Create a pricing service for a menu.
    #[must_use]
    pub const fn new(menu: &'a MenuDocument) -> Self {
        Self { menu }
    }

    /// Order total, never negative.
    #[must_use]
    pub fn price(&self, order: &Order) -> Money {
        self.quote(order).total
    }

    /// Price an order and keep every intermediate step.
    #[must_use]
    pub fn quote(&self, order: &Order) -> PriceBreakdown {
        let lines = self.line_costs(order);
        let subtotal: Money = lines.iter().map(|line| line.cost).sum();
        let mut total = subtotal;

        let mut discount_steps = Vec::with_capacity(order.discounts_applied().len());
        for applied in order.discounts_applied() {
            let Some((name, discount)) = self.menu.discount(applied) else {
                warn!(discount = %applied, "Discount not on menu, skipped");
                continue;
            };
            let bypass_cost: Money = lines
                .iter()
                .filter(|line| discount.bypasses(&line.name))
                .map(|line| line.cost)
                .sum();
            let discountable = subtotal - bypass_cost;
            let reduction = discountable * discount.percent().rate();
            total -= reduction;
            debug!(
                discount = %name,
                percent = %discount.percent(),
                discountable = %discountable,
                reduction = %reduction,
                running_total = %total,
                "Discount applied"
            );
            discount_steps.push(DiscountStep {
                name: name.to_string(),
                percent: discount.percent(),
                discountable,
                reduction,
            });
        }

        let custom_discount = order.custom_discount().map(|raw| {
            let percent = Percent::clamped(raw);
            let discountable = total;
            let reduction = discountable * percent.rate();
            total = discountable * (Decimal::ONE - percent.rate());
            debug!(percent = %percent, reduction = %reduction, "Custom discount applied");
            DiscountStep {
                name: CUSTOM_DISCOUNT.to_string(),
                percent,
                discountable,
                reduction,
            }
        });

        let total = total.non_negative();
        debug!(
            lines = lines.len(),
            subtotal = %subtotal,
            total = %total,
            "Order priced"
        );

        PriceBreakdown {
            lines,
            subtotal,
            discount_steps,
            custom_discount,
            total,
        }
    }

    /// Line costs from the order as entered.
    ///
    /// Combos missing from the menu contribute nothing.
    #[must_use]
    pub fn line_costs(&self, order: &Order) -> Vec<LineCost> {
        let resolver = PriceResolver::new(self.menu);
        let mut lines: Vec<LineCost> = order
            .item_lines()
            .filter(|(_, _, qty)| *qty > 0)
            .map(|(category, item, quantity)| {
                let unit_price = resolver.resolve(item, Some(category));
                LineCost {
                    name: item.to_string(),
                    kind: LineKind::Item {
                        category: category.to_string(),
                    },
                    quantity,
                    unit_price,
                    cost: unit_price * quantity,
                }
            })
            .collect();

        for (name, selection) in order.combos() {
            let Some((canonical, definition)) = self.menu.combo(name) else {
                warn!(combo = %name, "Combo not on menu, priced at zero");
                continue;
            };
            let expansion = ComboExpander::expand(canonical, definition, selection);
            if expansion.units == 0 {
                continue;
            }
            lines.push(LineCost {
                name: canonical.to_string(),
                kind: LineKind::Combo,
                quantity: expansion.units,
                unit_price: expansion.unit_price,
                cost: expansion.total_price(),
            });
        }
        lines
    }
}

//! Price breakdown of one order.

use crate::domain::shared::{Money, Percent};

/// What an order line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Normal item in a category.
    Item {
        /// Lowercase category key.
        category: String,
    },
    /// Combo priced flat per unit.
    Combo,
}

/// Cost of one order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCost {
    /// Item or combo name.
    pub name: String,
    /// Line kind.
    pub kind: LineKind,
    /// Quantity (combo units for combos).
    pub quantity: u32,
    /// Resolved unit price.
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub cost: Money,
}

/// One discount applied to the running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountStep {
    /// Discount name.
    pub name: String,
    /// Percent applied.
    pub percent: Percent,
    /// Amount the percent was applied to.
    pub discountable: Money,
    /// Amount taken off the running total.
    pub reduction: Money,
}

/// Full result of a pricing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Line costs from the original order contents.
    pub lines: Vec<LineCost>,
    /// Sum of line costs.
    pub subtotal: Money,
    /// Named discounts, in application order.
    pub discount_steps: Vec<DiscountStep>,
    /// Custom discount, applied last.
    pub custom_discount: Option<DiscountStep>,
    /// Final total, floored at zero and not rounded.
    pub total: Money,
}

impl PriceBreakdown {
    /// Sum of every reduction, including the custom discount.
    #[must_use]
    pub fn total_reduction(&self) -> Money {
        self.discount_steps
            .iter()
            .chain(self.custom_discount.as_ref())
            .map(|step| step.reduction)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_reduction_includes_custom_discount() {
        let step = |name: &str, reduction| DiscountStep {
            name: name.to_string(),
            percent: Percent::ZERO,
            discountable: Money::ZERO,
            reduction,
        };
        let breakdown = PriceBreakdown {
            lines: Vec::new(),
            subtotal: Money::whole(100),
            discount_steps: vec![step("Staff", Money::whole(40))],
            custom_discount: Some(step("Custom", Money::whole(6))),
            total: Money::whole(54),
        };
        assert_eq!(breakdown.total_reduction(), Money::whole(46));
    }
}

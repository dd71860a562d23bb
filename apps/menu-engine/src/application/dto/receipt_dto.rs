//! Receipt DTO

use serde::{Deserialize, Serialize};

use crate::domain::order::Order;
use crate::domain::shared::Money;

/// Confirmed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDto {
    /// `item: xN` and `Combo: name xN` lines.
    pub lines: Vec<String>,
    /// Discounts applied, in order.
    pub discounts: Vec<String>,
    /// Amount charged.
    pub total: Money,
}

impl ReceiptDto {
    /// Receipt for an order priced at `total`.
    #[must_use]
    pub fn new(order: &Order, total: Money) -> Self {
        let mut lines: Vec<String> = order
            .item_lines()
            .map(|(_, item, qty)| format!("{item}: x{qty}"))
            .collect();
        lines.extend(
            order
                .combos()
                .iter()
                .map(|(name, combo)| format!("Combo: {name} x{}", combo.units())),
        );
        Self {
            lines,
            discounts: order.discounts_applied().to_vec(),
            total,
        }
    }

    /// Receipt text.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::from("Order details:\n");
        out.push_str(&self.lines.join("\n"));
        if !self.discounts.is_empty() {
            out.push_str("\n\nDiscounts applied:");
            for discount in &self.discounts {
                out.push_str("\n  - ");
                out.push_str(discount);
            }
        }
        out.push_str(&format!("\n\nTotal: {}", self.total));
        out
    }
}

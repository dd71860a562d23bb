//! Order summary DTO
//!
//! The live summary shown while an order is composed.

use serde::{Deserialize, Serialize};

use crate::domain::limits::{LimitValidator, LimitViolation};
use crate::domain::menu::{ComboCategory, MenuDocument};
use crate::domain::order::{ComboOrder, Order};
use crate::domain::pricing::OrderPricingService;
use crate::domain::shared::Money;

/// Line framing the combos block.
pub const SEPARATOR: &str = "---------------------------------";

const MEAL_INDENT: &str = "     ";
const ITEM_INDENT: &str = "              ";

/// Summary of an order: display lines, total and any limit violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryDto {
    /// Display lines, empty for an empty order.
    pub lines: Vec<String>,
    /// Order total.
    pub total: Money,
    /// Violations to fix before checkout.
    pub violations: Vec<LimitViolation>,
}

impl OrderSummaryDto {
    /// Build the summary of `order` against `menu`.
    #[must_use]
    pub fn build(order: &Order, menu: &MenuDocument) -> Self {
        let normal_lines = normal_lines(order);
        let combo_lines = combo_lines(order, menu);

        let mut lines = Vec::new();
        match (combo_lines.is_empty(), normal_lines.is_empty()) {
            (false, false) => {
                lines.extend(combo_lines);
                lines.push(SEPARATOR.to_string());
                lines.extend(normal_lines);
                lines.push(SEPARATOR.to_string());
            }
            (false, true) => lines.extend(combo_lines),
            (true, false) => lines.extend(normal_lines),
            (true, true) => {}
        }

        if !order.discounts_applied().is_empty() {
            lines.push("\nDiscounts Applied:".to_string());
            lines.extend(order.discounts_applied().iter().map(|d| format!("  - {d}")));
        }

        Self {
            lines,
            total: OrderPricingService::new(menu).price(order),
            violations: LimitValidator::new(menu).violations(order),
        }
    }

    /// Summary text with the total on the last line.
    #[must_use]
    pub fn text(&self) -> String {
        let body = if self.lines.is_empty() {
            "No items selected.".to_string()
        } else {
            self.lines.join("\n")
        };
        format!("{body}\n\nTotal: {}", self.total)
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

fn normal_lines(order: &Order) -> Vec<String> {
    let mut lines = Vec::new();
    for (category, items) in order.items() {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{}:", capitalize(category)));
        lines.extend(items.iter().map(|(item, qty)| format!("  - {item}: x{qty}")));
    }
    lines
}

fn combo_lines(order: &Order, menu: &MenuDocument) -> Vec<String> {
    if order.combos().is_empty() {
        return Vec::new();
    }
    let mut lines = vec![SEPARATOR.to_string(), "Combos:".to_string()];
    for (name, selection) in order.combos() {
        lines.push(format!("  - {name}: x{}", selection.units()));
        let definition = menu.combo(name).map(|(_, definition)| definition);
        match (definition, selection) {
            (Some(definition), _) if !definition.is_mix_and_match() => {
                let units = selection.units();
                lines.push(format!("\n{MEAL_INDENT}Meal #1:"));
                for category in ComboCategory::SUMMARY_ORDER {
                    for (item_category, item, per_unit) in definition.fixed_items() {
                        if item_category == category {
                            lines.push(format!(
                                "{ITEM_INDENT}{}: - {item} x {}",
                                category.label(),
                                per_unit.saturating_mul(units)
                            ));
                        }
                    }
                }
                lines.push(String::new());
            }
            (_, ComboOrder::MixAndMatch { meals }) => {
                for (index, meal) in meals.iter().enumerate() {
                    lines.push(format!("\n{MEAL_INDENT}Meal #{}:", index + 1));
                    for category in ComboCategory::SUMMARY_ORDER {
                        if let Some(items) = meal.items().get(&category) {
                            lines.extend(items.iter().map(|(item, qty)| {
                                format!("{ITEM_INDENT}{}: - {item} x {qty}", category.label())
                            }));
                        }
                    }
                }
                lines.push(String::new());
            }
            (_, ComboOrder::Fixed { .. }) => lines.push(String::new()),
        }
    }
    lines.push(SEPARATOR.to_string());
    lines
}

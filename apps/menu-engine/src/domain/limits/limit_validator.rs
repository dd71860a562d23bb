//! Limit Validator
//!
//! Rules, each fully checked before the next:
//!
//! 1. normal items against `item_limits`
//! 2. mix-and-match meals against per-category caps
//! 3. items inside combos against `item_limits` (fixed combos as
//!    `quantity per unit * units`, mix-and-match per meal)
//!
//! A limit of 0 means unlimited. Combos missing from the menu are skipped.

use super::LimitViolation;
use crate::domain::menu::MenuDocument;
use crate::domain::order::Order;
use crate::domain::pricing::ComboExpander;

/// Validates orders against one menu.
#[derive(Debug, Clone, Copy)]
pub struct LimitValidator<'a> {
    menu: &'a MenuDocument,
}

impl<'a> LimitValidator<'a> {
    /// Create a validator for a menu.
    #[must_use]
    pub const fn new(menu: &'a MenuDocument) -> Self {
        Self { menu }
    }

    /// First violation, if any.
    ///
    /// # Errors
    ///
    /// Returns the first violated limit in rule order.
    pub fn validate(&self, order: &Order) -> Result<(), LimitViolation> {
        match self.violations(order).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Every violation, in rule order.
    #[must_use]
    pub fn violations(&self, order: &Order) -> Vec<LimitViolation> {
        let mut violations = self.item_violations(order);
        violations.extend(self.meal_category_violations(order));
        violations.extend(self.combo_item_violations(order));
        violations
    }

    fn item_violations(&self, order: &Order) -> Vec<LimitViolation> {
        order
            .item_lines()
            .filter_map(|(_, item, quantity)| {
                let limit = self.menu.item_limit(item);
                (limit > 0 && quantity > limit).then(|| LimitViolation::ItemLimitExceeded {
                    item: item.to_string(),
                    quantity,
                    limit,
                })
            })
            .collect()
    }

    fn meal_category_violations(&self, order: &Order) -> Vec<LimitViolation> {
        let mut violations = Vec::new();
        for (name, selection) in order.combos() {
            let Some((combo, definition)) = self.menu.combo(name) else {
                continue;
            };
            if !definition.is_mix_and_match() {
                continue;
            }
            let offered = ComboExpander::offered_categories(definition);
            for (meal_index, meal) in selection.meals().iter().enumerate() {
                for category in &offered {
                    let limit = definition.limit(*category);
                    let quantity = meal.total(*category);
                    if limit > 0 && quantity > limit {
                        violations.push(LimitViolation::ComboCategoryLimitExceeded {
                            combo: combo.to_string(),
                            meal_index,
                            category: *category,
                            quantity,
                            limit,
                        });
                    }
                }
            }
        }
        violations
    }

    fn combo_item_violations(&self, order: &Order) -> Vec<LimitViolation> {
        let mut violations = Vec::new();
        for (name, selection) in order.combos() {
            let Some((combo, definition)) = self.menu.combo(name) else {
                continue;
            };
            let expansion = ComboExpander::expand(combo, definition, selection);
            for contribution in &expansion.contributions {
                let limit = self.menu.item_limit(&contribution.item);
                if limit > 0 && contribution.quantity > limit {
                    violations.push(LimitViolation::ComboItemLimitExceeded {
                        combo: combo.to_string(),
                        meal_index: contribution.meal,
                        item: contribution.item.clone(),
                        quantity: contribution.quantity,
                        limit,
                    });
                }
            }
        }
        violations
    }
}

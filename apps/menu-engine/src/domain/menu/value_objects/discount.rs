//! Discount definitions.

use std::collections::BTreeSet;

use crate::domain::shared::{Percent, names_match};

/// A named percentage discount.
///
/// Bypass items (and combos) are priced at full value: the discount only
/// applies to the part of the total that does not come from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountDefinition {
    percent: Percent,
    bypass_items: BTreeSet<String>,
}

impl DiscountDefinition {
    /// Create a discount.
    #[must_use]
    pub const fn new(percent: Percent, bypass_items: BTreeSet<String>) -> Self {
        Self {
            percent,
            bypass_items,
        }
    }

    /// Discount with no bypass items.
    #[must_use]
    pub const fn flat(percent: Percent) -> Self {
        Self::new(percent, BTreeSet::new())
    }

    /// Discount percent.
    #[must_use]
    pub const fn percent(&self) -> Percent {
        self.percent
    }

    /// Item and combo names exempt from this discount.
    #[must_use]
    pub const fn bypass_items(&self) -> &BTreeSet<String> {
        &self.bypass_items
    }

    /// Returns true if `name` is exempt, ignoring case.
    #[must_use]
    pub fn bypasses(&self, name: &str) -> bool {
        self.bypass_items.contains(name) || self.bypass_items.iter().any(|b| names_match(b, name))
    }

    pub(crate) const fn set_percent(&mut self, percent: Percent) {
        self.percent = percent;
    }

    pub(crate) const fn bypass_items_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.bypass_items
    }
}

//! Expanded combo contents.

use std::collections::BTreeMap;

use crate::domain::menu::ComboCategory;
use crate::domain::shared::Money;

/// One item a combo puts on the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// Category slot.
    pub category: ComboCategory,
    /// Canonical item name.
    pub item: String,
    /// Quantity contributed (already multiplied by units for fixed combos).
    pub quantity: u32,
    /// Zero-based meal index for mix-and-match combos.
    pub meal: Option<usize>,
}

/// A combo flattened into item contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboExpansion {
    /// Combo name.
    pub combo: String,
    /// Combo units: spinbox quantity, or number of meals.
    pub units: u32,
    /// Price of one unit.
    pub unit_price: Money,
    /// Item contributions.
    pub contributions: Vec<Contribution>,
}

impl ComboExpansion {
    /// Flat combo cost: unit price times units.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.unit_price * self.units
    }

    /// Total quantity per item across all meals.
    #[must_use]
    pub fn item_totals(&self) -> BTreeMap<&str, u32> {
        let mut totals = BTreeMap::new();
        for contribution in &self.contributions {
            let total = totals.entry(contribution.item.as_str()).or_insert(0u32);
            *total = total.saturating_add(contribution.quantity);
        }
        totals
    }

    /// Contributions belonging to one meal.
    pub fn meal(&self, index: usize) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(move |c| c.meal == Some(index))
    }
}

//! Combo Expander
//!
//! Turns a combo definition plus the customer's selection into item
//! contributions. The combo price is flat per unit and never derived from
//! the contained items.

use crate::domain::menu::{ComboCategory, ComboDefinition, ComboModel};
use crate::domain::order::{ComboOrder, MealSelection};
use crate::domain::pricing::value_objects::{ComboExpansion, Contribution};

/// Stateless combo expansion.
pub struct ComboExpander;

impl ComboExpander {
    /// Expand `selection` against `definition`.
    ///
    /// The definition decides the model. Fixed combos contribute
    /// `quantity per unit * units` of each item. Mix-and-match combos
    /// contribute each meal's chosen quantities; categories without eligible
    /// items are skipped.
    #[must_use]
    pub fn expand(name: &str, definition: &ComboDefinition, selection: &ComboOrder) -> ComboExpansion {
        let units = selection.units();
        let contributions = match definition.model() {
            ComboModel::Fixed { .. } => definition
                .fixed_items()
                .filter_map(|(category, item, per_unit)| {
                    let quantity = per_unit.saturating_mul(units);
                    (quantity > 0).then(|| Contribution {
                        category,
                        item: item.to_string(),
                        quantity,
                        meal: None,
                    })
                })
                .collect(),
            ComboModel::MixAndMatch { .. } => {
                let offered = Self::offered_categories(definition);
                let offered = &offered;
                selection
                    .meals()
                    .iter()
                    .enumerate()
                    .flat_map(move |(index, meal)| {
                        meal.items()
                            .iter()
                            .filter(move |(category, _)| offered.contains(*category))
                            .flat_map(move |(category, entries)| {
                                entries.iter().filter(|(_, qty)| **qty > 0).map(
                                    move |(item, qty)| Contribution {
                                        category: *category,
                                        item: item.clone(),
                                        quantity: *qty,
                                        meal: Some(index),
                                    },
                                )
                            })
                    })
                    .collect()
            }
        };

        ComboExpansion {
            combo: name.to_string(),
            units,
            unit_price: definition.price(),
            contributions,
        }
    }

    /// Categories of a mix-and-match combo that have eligible items.
    #[must_use]
    pub fn offered_categories(definition: &ComboDefinition) -> Vec<ComboCategory> {
        match definition.model() {
            ComboModel::MixAndMatch { eligible, .. } => ComboCategory::ALL
                .into_iter()
                .filter(|c| eligible.get(c).is_some_and(|items| !items.is_empty()))
                .collect(),
            ComboModel::Fixed { .. } => Vec::new(),
        }
    }

    /// Room left in a meal's category before the cap; `None` when uncapped.
    #[must_use]
    pub fn remaining_capacity(
        definition: &ComboDefinition,
        meal: &MealSelection,
        category: ComboCategory,
    ) -> Option<u32> {
        match definition.limit(category) {
            0 => None,
            cap => Some(cap.saturating_sub(meal.total(category))),
        }
    }
}

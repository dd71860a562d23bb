//! Order construction errors.

use std::fmt;

use crate::domain::menu::ComboCategory;

/// Errors raised while composing an order against a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Combo is not on the menu.
    UnknownCombo {
        /// Combo name as given.
        combo: String,
    },

    /// Meal selection was attempted on a fixed combo.
    NotMixAndMatch {
        /// Combo name.
        combo: String,
    },

    /// Item is not eligible for the combo category.
    ItemNotEligible {
        /// Combo name.
        combo: String,
        /// Category slot.
        category: ComboCategory,
        /// Item name as given.
        item: String,
    },

    /// Meal index is past the number of meals ordered.
    MealOutOfRange {
        /// Combo name.
        combo: String,
        /// Zero-based meal index.
        meal: usize,
        /// Meals currently ordered.
        meals: usize,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCombo { combo } => write!(f, "Combo not found: {combo}"),
            Self::NotMixAndMatch { combo } => {
                write!(f, "Combo '{combo}' is not mix-and-match")
            }
            Self::ItemNotEligible {
                combo,
                category,
                item,
            } => {
                write!(f, "'{item}' is not eligible for {category} in combo '{combo}'")
            }
            Self::MealOutOfRange { combo, meal, meals } => {
                write!(
                    f,
                    "Combo '{combo}' has {meals} meal(s); meal #{} does not exist",
                    meal + 1
                )
            }
        }
    }
}

impl std::error::Error for OrderError {}

//! Limit violation descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::menu::ComboCategory;

/// A violated quantity limit, with enough context to tell the customer what
/// to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitViolation {
    /// A normal item is ordered past its limit.
    ItemLimitExceeded {
        /// Item name.
        item: String,
        /// Quantity ordered.
        quantity: u32,
        /// Configured limit.
        limit: u32,
    },

    /// A mix-and-match meal has more items in a category than the cap.
    ComboCategoryLimitExceeded {
        /// Combo name.
        combo: String,
        /// Zero-based meal index.
        meal_index: usize,
        /// Category slot.
        category: ComboCategory,
        /// Quantity in the meal's category.
        quantity: u32,
        /// Per-meal cap.
        limit: u32,
    },

    /// An item inside a combo exceeds its global item limit.
    ComboItemLimitExceeded {
        /// Combo name.
        combo: String,
        /// Meal index for mix-and-match combos; `None` for fixed combos.
        meal_index: Option<usize>,
        /// Item name.
        item: String,
        /// Quantity the combo contributes.
        quantity: u32,
        /// Configured limit.
        limit: u32,
    },
}

impl LimitViolation {
    /// Stable violation code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ItemLimitExceeded { .. } => "ITEM_LIMIT_EXCEEDED",
            Self::ComboCategoryLimitExceeded { .. } => "COMBO_CATEGORY_LIMIT_EXCEEDED",
            Self::ComboItemLimitExceeded { .. } => "COMBO_ITEM_LIMIT_EXCEEDED",
        }
    }

    /// The limit that was exceeded.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        match self {
            Self::ItemLimitExceeded { limit, .. }
            | Self::ComboCategoryLimitExceeded { limit, .. }
            | Self::ComboItemLimitExceeded { limit, .. } => *limit,
        }
    }
}

impl fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemLimitExceeded { item, limit, .. } => {
                write!(f, "Limit exceeded for {item}: max {limit}")
            }
            Self::ComboCategoryLimitExceeded {
                combo,
                meal_index,
                category,
                limit,
                ..
            } => write!(
                f,
                "Combo '{combo}' meal #{} exceeds {category} max limit ({limit}).",
                meal_index + 1
            ),
            Self::ComboItemLimitExceeded { item, limit, .. } => {
                write!(f, "Limit exceeded for combo item '{item}': max {limit}")
            }
        }
    }
}

impl std::error::Error for LimitViolation {}

//! Combo entries of an order.

use super::MealSelection;

/// How many of a combo were ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboOrder {
    /// Number of fixed combo units.
    Fixed {
        /// Units ordered.
        quantity: u32,
    },
    /// Mix-and-match meals; one meal is one combo unit, empty meals included.
    MixAndMatch {
        /// Meals in order.
        meals: Vec<MealSelection>,
    },
}

impl ComboOrder {
    /// Combo units ordered.
    #[must_use]
    pub fn units(&self) -> u32 {
        match self {
            Self::Fixed { quantity } => *quantity,
            Self::MixAndMatch { meals } => u32::try_from(meals.len()).unwrap_or(u32::MAX),
        }
    }

    /// Meals, or an empty slice for fixed combos.
    #[must_use]
    pub fn meals(&self) -> &[MealSelection] {
        match self {
            Self::Fixed { .. } => &[],
            Self::MixAndMatch { meals } => meals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_meals_count_as_units() {
        let order = ComboOrder::MixAndMatch {
            meals: vec![MealSelection::new(), MealSelection::new()],
        };
        assert_eq!(order.units(), 2);
        assert_eq!(order.meals().len(), 2);
    }

    #[test]
    fn fixed_has_no_meals() {
        let order = ComboOrder::Fixed { quantity: 3 };
        assert_eq!(order.units(), 3);
        assert!(order.meals().is_empty());
    }
}

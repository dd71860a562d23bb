//! Percentage value object for discounts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A percentage in the closed range `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One hundred percent.
    pub const FULL: Self = Self(Decimal::ONE_HUNDRED);

    /// Create a percentage, rejecting values outside `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is out of range.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidValue {
                field: "percent".to_string(),
                message: format!("must be between 0 and 100, got {value}"),
            });
        }
        Ok(Self(value))
    }

    /// Create a percentage, clamping the value into `[0, 100]`.
    #[must_use]
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Create a whole-number percentage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `value > 100`.
    pub fn whole(value: u8) -> Result<Self, DomainError> {
        Self::new(Decimal::from(value))
    }

    /// The percentage value (e.g. `50` for 50%).
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// The fraction this percentage represents (e.g. `0.5` for 50%).
    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// The percentage as a whole number, when it has no fractional part.
    #[must_use]
    pub fn as_whole(&self) -> Option<u8> {
        if self.0.fract().is_zero() {
            self.0.to_u8()
        } else {
            None
        }
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for Decimal {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_new_rejects_out_of_range() {
        assert!(Percent::new(dec!(-1)).is_err());
        assert!(Percent::new(dec!(100.01)).is_err());
        assert!(Percent::new(dec!(0)).is_ok());
        assert!(Percent::new(dec!(100)).is_ok());
    }

    #[test]
    fn percent_clamped() {
        assert_eq!(Percent::clamped(dec!(150)), Percent::FULL);
        assert_eq!(Percent::clamped(dec!(-5)), Percent::ZERO);
        assert_eq!(Percent::clamped(dec!(12.5)).value(), dec!(12.5));
    }

    #[test]
    fn percent_rate() {
        assert_eq!(Percent::whole(50).unwrap().rate(), dec!(0.5));
        assert_eq!(Percent::clamped(dec!(12.5)).rate(), dec!(0.125));
    }

    #[test]
    fn percent_as_whole() {
        assert_eq!(Percent::whole(15).unwrap().as_whole(), Some(15));
        assert_eq!(Percent::new(dec!(15.00)).unwrap().as_whole(), Some(15));
        assert_eq!(Percent::new(dec!(15.5)).unwrap().as_whole(), None);
    }

    #[test]
    fn percent_display() {
        assert_eq!(Percent::whole(10).unwrap().to_string(), "10%");
        assert_eq!(Percent::clamped(dec!(12.50)).to_string(), "12.5%");
    }

    #[test]
    fn percent_serde_validates() {
        assert!(serde_json::from_str::<Percent>("101").is_err());
        let p: Percent = serde_json::from_str("25").unwrap();
        assert_eq!(p.as_whole(), Some(25));
    }
}

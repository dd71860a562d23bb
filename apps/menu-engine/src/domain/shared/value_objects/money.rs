//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::domain::shared::DomainError;

/// A monetary amount.
///
/// Represented as a Decimal for precise calculations. Intermediate math keeps
/// full precision; rounding to cents only happens for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money value from a whole number of currency units.
    #[must_use]
    pub fn whole(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest price a menu entry may carry.
    pub const MAX_PRICE: Self = Self(Decimal::from_parts(1_000_000, 0, 0, false, 0));

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Floor the amount at zero.
    #[must_use]
    pub fn non_negative(self) -> Self {
        if self.is_negative() { Self::ZERO } else { self }
    }

    /// Validate an amount entered as a menu price.
    ///
    /// # Errors
    ///
    /// Returns error if amount is negative or above [`Money::MAX_PRICE`].
    pub fn validate_for_price(&self, field: &str) -> Result<(), DomainError> {
        if self.is_negative() {
            return Err(DomainError::InvalidValue {
                field: field.to_string(),
                message: format!("price cannot be negative: {}", self.0),
            });
        }
        if *self > Self::MAX_PRICE {
            return Err(DomainError::InvalidValue {
                field: field.to_string(),
                message: format!("price exceeds maximum: {}", Self::MAX_PRICE),
            });
        }
        Ok(())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Formats as `$1,234.50`: rounded to cents with thousands separators.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let plain = format!("{:.2}", rounded.abs());
        let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "{sign}${grouped}.{cents}")
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// Arithmetic saturates at the Decimal range instead of panicking.

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_display_rounds_and_groups() {
        assert_eq!(Money::new(dec!(54)).to_string(), "$54.00");
        assert_eq!(Money::new(dec!(1234.5)).to_string(), "$1,234.50");
        assert_eq!(Money::new(dec!(1234567.891)).to_string(), "$1,234,567.89");
        assert_eq!(Money::new(dec!(999.999)).to_string(), "$1,000.00");
        assert_eq!(Money::new(dec!(-12.5)).to_string(), "-$12.50");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn money_from_cents() {
        let m = Money::from_cents(15050);
        assert_eq!(m.amount(), dec!(150.50));
    }

    #[test]
    fn money_round_keeps_display_precision_only() {
        let m = Money::new(dec!(150.555));
        assert_eq!(m.round().amount(), dec!(150.56));
        assert_eq!(m.amount(), dec!(150.555));
    }

    #[test]
    fn money_arithmetic() {
        let mut a = Money::whole(100);
        let b = Money::whole(40);

        assert_eq!(a + b, Money::whole(140));
        assert_eq!(a - b, Money::whole(60));
        assert_eq!(b * 3, Money::whole(120));
        assert_eq!(a * dec!(0.5), Money::whole(50));

        a -= b;
        assert_eq!(a, Money::whole(60));
        a += b;
        assert_eq!(a, Money::whole(100));
    }

    #[test]
    fn money_sum() {
        let parts = [Money::whole(1), Money::from_cents(250), Money::whole(3)];
        let total: Money = parts.iter().sum();
        assert_eq!(total.amount(), dec!(6.50));
    }

    #[test]
    fn money_non_negative_floors_at_zero() {
        assert_eq!(Money::new(dec!(-0.01)).non_negative(), Money::ZERO);
        assert_eq!(Money::whole(5).non_negative(), Money::whole(5));
    }

    #[test]
    fn money_validate_for_price() {
        assert!(Money::whole(0).validate_for_price("Burger").is_ok());
        assert!(Money::new(dec!(-1)).validate_for_price("Burger").is_err());
        assert!(Money::MAX_PRICE.validate_for_price("Burger").is_ok());
        assert!(
            (Money::MAX_PRICE + Money::from_cents(1))
                .validate_for_price("Burger")
                .is_err()
        );
    }

    #[test]
    fn money_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge * 2, huge);
        assert_eq!(huge + Money::whole(1), huge);
        assert_eq!(Money::new(Decimal::MIN) - Money::whole(1), Money::new(Decimal::MIN));
        assert_eq!(huge * dec!(3), huge);
        let total: Money = [huge, huge].iter().sum();
        assert_eq!(total, huge);
    }

    #[test]
    fn money_serde_is_transparent() {
        let m = Money::new(dec!(12.5));
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}

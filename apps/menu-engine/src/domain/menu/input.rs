//! Boundary parsers for editor-entered text.
//!
//! Values are rejected here, before they reach a `MenuDocument`.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::MenuError;
use crate::domain::shared::{Money, Percent};

/// Parse a non-negative price no larger than [`Money::MAX_PRICE`].
pub fn parse_price(raw: &str) -> Result<Money, MenuError> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MenuError::malformed("price", raw, "must be a number"))?;
    if value < Decimal::ZERO {
        return Err(MenuError::malformed("price", raw, "must not be negative"));
    }
    let price = Money::new(value);
    if price > Money::MAX_PRICE {
        return Err(MenuError::malformed(
            "price",
            raw,
            &format!("must not exceed {}", Money::MAX_PRICE),
        ));
    }
    Ok(price)
}

/// Parse a non-negative integer quantity limit (0 means unlimited).
pub fn parse_limit(raw: &str) -> Result<u32, MenuError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return Err(MenuError::malformed(
            "limit",
            raw,
            "must be a non-negative integer",
        ));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| MenuError::malformed("limit", raw, "must be a non-negative integer"))
}

/// Parse a whole-number discount percent between 0 and 100.
pub fn parse_percent(raw: &str) -> Result<Percent, MenuError> {
    let value = raw.trim().parse::<u8>().map_err(|_| {
        MenuError::malformed("percent", raw, "must be an integer between 0 and 100")
    })?;
    Percent::whole(value)
        .map_err(|_| MenuError::malformed("percent", raw, "must be an integer between 0 and 100"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case("12.50", dec!(12.50) ; "decimal")]
    #[test_case(" 7 ", dec!(7) ; "padded integer")]
    #[test_case("0", dec!(0) ; "zero")]
    #[test_case("1e1", dec!(10) ; "scientific")]
    fn parse_price_accepts(raw: &str, expected: Decimal) {
        assert_eq!(parse_price(raw).unwrap().amount(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("abc" ; "text")]
    #[test_case("-1" ; "negative")]
    #[test_case("5e28" ; "above maximum")]
    #[test_case("1000000.01" ; "just above maximum")]
    fn parse_price_rejects(raw: &str) {
        assert!(matches!(
            parse_price(raw),
            Err(MenuError::MalformedInput { .. })
        ));
    }

    #[test_case("0", 0 ; "zero means unlimited")]
    #[test_case("3", 3 ; "positive")]
    fn parse_limit_accepts(raw: &str, expected: u32) {
        assert_eq!(parse_limit(raw).unwrap(), expected);
    }

    #[test_case("-2" ; "negative")]
    #[test_case("2.5" ; "fractional")]
    #[test_case("many" ; "text")]
    fn parse_limit_rejects(raw: &str) {
        assert!(parse_limit(raw).is_err());
    }

    #[test]
    fn parse_percent_range() {
        assert_eq!(parse_percent("50").unwrap().as_whole(), Some(50));
        assert_eq!(parse_percent("100").unwrap(), Percent::FULL);
        assert!(parse_percent("101").is_err());
        assert!(parse_percent("-1").is_err());
        assert!(parse_percent("12.5").is_err());
    }
}

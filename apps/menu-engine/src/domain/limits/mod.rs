//! Limits Bounded Context
//!
//! Checks an order against per-item limits and per-meal combo caps.

mod limit_validator;
mod limit_violation;

pub use limit_validator::LimitValidator;
pub use limit_violation::LimitViolation;

use crate::domain::menu::MenuDocument;
use crate::domain::order::Order;

/// Check an order, stopping at the first violation.
///
/// # Errors
///
/// Returns the first violated limit.
pub fn validate(order: &Order, menu: &MenuDocument) -> Result<(), LimitViolation> {
    LimitValidator::new(menu).validate(order)
}

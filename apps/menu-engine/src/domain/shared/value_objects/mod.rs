//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod money;
mod name_key;
mod percent;

pub use money::Money;
pub use name_key::{name_key, names_match};
pub use percent::Percent;

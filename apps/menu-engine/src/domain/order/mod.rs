//! Order Bounded Context
//!
//! The ephemeral order a customer builds against a menu. Orders are never
//! persisted; they live for one pricing and validation pass and are cleared
//! after checkout.

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::Order;
pub use errors::OrderError;
pub use value_objects::{AssignOutcome, ComboOrder, MealSelection};

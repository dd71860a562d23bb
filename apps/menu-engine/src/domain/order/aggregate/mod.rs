//! Order Aggregate

mod order;

pub use order::{FALLBACK_CATEGORY, Order};

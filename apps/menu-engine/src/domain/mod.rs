//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: The menu document and its editing invariants
//! - **Value Objects**: Money, percentages, combos, discounts, orders
//! - **Domain Services**: Stateless pricing, expansion and validation logic
//!
//! # Bounded Contexts
//!
//! - [`menu`]: Menu document model and editing operations
//! - [`order`]: Orders built from presentation-layer selections
//! - [`pricing`]: Price resolution, combo expansion and order totals
//! - [`limits`]: Quantity limit validation

pub mod limits;
pub mod menu;
pub mod order;
pub mod pricing;
pub mod shared;

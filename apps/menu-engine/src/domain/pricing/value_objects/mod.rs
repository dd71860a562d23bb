//! Pricing Value Objects

mod combo_expansion;
mod price_breakdown;

pub use combo_expansion::{ComboExpansion, Contribution};
pub use price_breakdown::{DiscountStep, LineCost, LineKind, PriceBreakdown};

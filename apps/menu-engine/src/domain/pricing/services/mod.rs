//! Pricing Services

mod combo_expander;
mod order_pricing_service;
mod price_resolver;

pub use combo_expander::ComboExpander;
pub use order_pricing_service::{CUSTOM_DISCOUNT, OrderPricingService};
pub use price_resolver::PriceResolver;

//! Menu Value Objects

mod combo;
mod discount;
mod price_list;
mod section;

pub use combo::{ComboCategory, ComboDefinition, ComboModel};
pub use discount::DiscountDefinition;
pub use price_list::{CATEGORY_DEFAULT_KEYS, PriceList};
pub use section::{COMBOS_SECTION, DEFAULT_SUBSECTION, SectionContent};

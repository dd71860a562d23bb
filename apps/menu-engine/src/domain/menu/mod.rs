//! Menu Bounded Context
//!
//! In-memory representation of one establishment's menu.
//!
//! # Key Concepts
//!
//! - **Section / Sub-section**: Two-level grouping of orderable items
//! - **Combo**: A bundle priced independently of its items, either fixed-quantity
//!   or mix-and-match with per-category caps
//! - **Discount**: A percentage reduction with a set of bypass items
//! - **Name Index**: Case-insensitive lookup that resolves to the casing an
//!   editor originally typed

pub mod aggregate;
pub mod errors;
pub mod input;
pub mod name_index;
pub mod value_objects;

pub use aggregate::MenuDocument;
pub use errors::MenuError;
pub use input::{parse_limit, parse_percent, parse_price};
pub use name_index::{IndexedItem, NameIndex};
pub use value_objects::{
    CATEGORY_DEFAULT_KEYS, COMBOS_SECTION, ComboCategory, ComboDefinition, ComboModel,
    DEFAULT_SUBSECTION, DiscountDefinition, PriceList, SectionContent,
};

//! Persistence Adapters
//!
//! Implementations of the `MenuStore` port and the persisted record shape.

pub mod in_memory;
pub mod json_file;
pub mod record;

pub use in_memory::InMemoryMenuStore;
pub use json_file::JsonFileMenuStore;
pub use record::MenuRecord;

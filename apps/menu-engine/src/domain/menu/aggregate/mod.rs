//! Menu Aggregate

mod editing;
mod menu_document;

pub use menu_document::MenuDocument;

//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach storage.

mod menu_store_port;

pub use menu_store_port::{MenuStore, StoreError, validate_establishment_name};

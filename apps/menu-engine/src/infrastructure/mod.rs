//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `persistence/`: menu store adapters (JSON files, in-memory)

pub mod persistence;

//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: The menu store the engine loads from and saves to
//! - **Use Cases**: Menu editing and order checkout
//! - **DTOs**: Order input, summary and receipt shapes

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;

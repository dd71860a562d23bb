//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for use case inputs and outputs.

mod order_dto;
mod order_summary_dto;
mod receipt_dto;

pub use order_dto::{ComboOrderDto, OrderDto};
pub use order_summary_dto::{OrderSummaryDto, SEPARATOR};
pub use receipt_dto::ReceiptDto;

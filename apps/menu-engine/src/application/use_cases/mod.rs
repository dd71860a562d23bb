//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod checkout;
mod edit_menu;

pub use checkout::CheckoutUseCase;
pub use edit_menu::{EditError, MenuEditorUseCase};

//! Order Value Objects

mod combo_order;
mod meal_selection;

pub use combo_order::ComboOrder;
pub use meal_selection::{AssignOutcome, MealSelection};

//! UI Components
//!
//! Leptos components for the food dashboard.

mod delete_confirm_button;
mod food_card;
mod food_form;
mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;

pub use delete_confirm_button::DeleteConfirmButton;
pub use food_card::FoodCard;
pub use food_form::{FoodFields, FoodFormFields};
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;

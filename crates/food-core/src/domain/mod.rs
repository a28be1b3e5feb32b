//! Domain Layer
//!
//! Food records, the payloads the forms produce, and the service error type.

mod entity;
mod food;

pub use entity::{Entity, ServiceError, ServiceResult};
pub use food::{format_price, FoodDraft, FoodId, FoodPatch, FoodRecord, NewFood};

//! Food Core
//!
//! Target-independent half of the food dashboard:
//! - domain: food records, form payloads and service errors
//! - state: the food list and modal state owned by the view
//! - service: the remote food service seam and its HTTP client
//! - flows: load/add/edit/delete, each ending in a state mutation

pub mod cancel;
pub mod config;
pub mod domain;
pub mod flows;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

pub use cancel::CancelToken;
pub use config::{ClientConfig, Reconcile, DEFAULT_API_BASE};
pub use domain::{
    format_price, Entity, FoodDraft, FoodId, FoodPatch, FoodRecord, NewFood, ServiceError,
    ServiceResult,
};
pub use flows::{FoodFlows, Settled};
pub use service::{FoodService, HttpFoodService};
pub use state::{EntityList, FoodList, ModalKind, ModalState, ModalTicket, ModalView, Mutation};

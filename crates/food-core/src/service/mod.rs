//! Remote Food Service
//!
//! The REST seam the flows talk through, and its reqwest implementation.

mod http;
mod traits;

pub use http::HttpFoodService;
pub use traits::FoodService;

//! Shared types for the dish service
//!
//! Data models and the JSON response envelope, used by the server and by
//! anything that talks to its HTTP API.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Dish, DishCreate, DishUpdate};
pub use response::ApiResponse;

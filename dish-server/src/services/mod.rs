//! 服务模块
//!
//! - [`DishService`] - dish CRUD and average price

pub mod dish;

pub use dish::DishService;

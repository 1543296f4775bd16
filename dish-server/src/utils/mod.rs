//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] - 应用错误类型
//! - [`query_builder`] - sparse UPDATE statements
//! - 日志初始化

pub mod error;
pub mod logger;
pub mod query_builder;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod dish;

// Re-exports
pub use dish::*;

//! API Response types
//!
//! Every JSON body the service produces uses this envelope:
//!
//! ```json
//! { "success": "dishes loaded successfully", "data": [ ... ] }
//! { "error": "dish not found" }
//! { "data": 20.0 }
//! ```
//!
//! Absent members are omitted rather than sent as `null`.

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable success message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    /// Human-readable error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn ok_with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
            data: Some(data),
        }
    }

    /// Create a bare data response (no message)
    pub fn data(data: T) -> Self {
        Self {
            success: None,
            error: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response without data
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
            data: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
            data: None,
        }
    }
}

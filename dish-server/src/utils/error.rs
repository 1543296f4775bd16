//! 统一错误处理
//!
//! [`AppError`] is the error every handler returns. All variants render as
//! `400 Bad Request` with a `{"error": "<message>"}` body. Not found,
//! duplicates and storage failures are deliberately not split into
//! 404/409/500, so existing clients keep working.
//!
//! ```ignore
//! Err(AppError::bad_request("invalid id"))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ApiResponse;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: missing fields, unparseable id, empty update body
    #[error("{0}")]
    BadRequest(String),

    /// Operation targets an id that does not exist
    #[error("{0}")]
    NotFound(String),

    /// Create collides with an existing name + price pair
    #[error("{0}")]
    Duplicate(String),

    /// Aggregate query over zero rows
    #[error("{0}")]
    EmptyCollection(String),

    /// Underlying storage operation failed
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn empty_collection(msg: impl Into<String>) -> Self {
        Self::EmptyCollection(msg.into())
    }

    /// Status code for this error
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Duplicate(msg),
            RepoError::Validation(msg) => AppError::BadRequest(msg),
            RepoError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage(msg) = &self {
            error!(target: "database", error = %msg, "Database error occurred");
        }

        let status = self.status();
        let body = Json(ApiResponse::error(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_errors_map_to_app_errors() {
        let err: AppError = RepoError::NotFound("dish not found".into()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "dish not found"));

        let err: AppError = RepoError::Duplicate("dish already exists".into()).into();
        assert!(matches!(err, AppError::Duplicate(_)));

        let err: AppError = RepoError::Validation("no fields to update".into()).into();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err: AppError = RepoError::Database("disk I/O error".into()).into();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn test_every_variant_is_bad_request() {
        let errors = [
            AppError::bad_request("invalid id"),
            AppError::NotFound("dish not found".into()),
            AppError::Duplicate("dish already exists".into()),
            AppError::empty_collection("there are no dishes"),
            AppError::Storage("database is locked".into()),
        ];
        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(AppError::NotFound("dish not found".into()).to_string(), "dish not found");
    }
}

//! Error types for songbook-server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Song store unreachable or query failed (500)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Any other common error reaching a handler (500)
    ///
    /// Catch-all for the `From<songbook_common::Error>` conversion. Current
    /// handlers only surface storage failures; config, I/O, and import
    /// errors belong to startup and the `--import` path.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<songbook_common::Error> for ApiError {
    fn from(err: songbook_common::Error) -> Self {
        match err {
            songbook_common::Error::StorageUnavailable(e) => {
                ApiError::StorageUnavailable(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);

        let (status, error_code, message) = match self {
            ApiError::StorageUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_UNAVAILABLE",
                msg,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

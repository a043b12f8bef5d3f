//! Error types for tracker operations
//!
//! Every failure is scoped to a single request. The HTTP layer renders
//! errors as `{"error": "<message>"}` with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// The referenced user does not exist
    #[error("{0}")]
    NotFound(String),
}

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }

    pub fn user_not_found() -> Self {
        TrackerError::NotFound("User was not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::Validation(_) => StatusCode::BAD_REQUEST,
            TrackerError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

//! HTTP error mapping.
//!
//! Translates application and domain errors into JSON error responses,
//! distinguished by status code so clients can tell validation failures
//! from upstream and persistence failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::chat::SendMessageError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// API-level error with a status code and machine-readable code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, "{}", self.message);
        }

        (
            self.status,
            Json(serde_json::json!({
                "error": self.message,
                "code": self.code,
            })),
        )
            .into_response()
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        match &err {
            SendMessageError::EmptyMessage => {
                ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            SendMessageError::Upstream(_) => {
                ApiError::new(StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.to_string())
            }
            SendMessageError::Persistence(_) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PERSISTENCE_ERROR",
                err.to_string(),
            ),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound | ErrorCode::ProfileNotFound => {
                ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", err.message)
            }
            ErrorCode::ValidationFailed => {
                ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.message)
            }
            ErrorCode::DatabaseError => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.message,
            ),
        }
    }
}

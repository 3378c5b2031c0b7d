use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::repository::StorageError;

/// HTTP API error with appropriate status codes and client-facing messages.
///
/// Every failure surfaces as `{"errors": <message>}` with the mapped status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 - every violated field, joined into one message
    #[error("{0}")]
    Validation(String),

    /// 400 - malformed or undecodable request body
    #[error("Invalid request body")]
    InvalidBody,

    /// 400 - duplicate username at registration
    #[error("{0}")]
    Conflict(String),

    /// 401 - missing or unresolvable session token
    #[error("Unauthorized")]
    Unauthorized,

    /// 401 - same message whether the username or the password was wrong
    #[error("username or password wrong")]
    InvalidCredentials,

    /// 404 - ownership or existence failure
    #[error("{0}")]
    NotFound(String),

    /// 500 - storage or hashing failure; the real cause is logged, not sent
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        // Don't expose internal SQL errors to clients
        tracing::error!("storage error: {}", err);
        ApiError::Internal
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("password hashing error: {}", err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "errors": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

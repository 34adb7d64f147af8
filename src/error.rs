//! Error types and HTTP error response handling.
//!
//! The service layer reports failures as an [`AppError`] carrying an
//! HTTP-style status code. Handlers surface that code verbatim as the
//! response status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Application-wide error type.
///
/// Unlike a closed enum of failure kinds, the status code here is chosen by
/// whoever produces the error (usually the account service), so any code the
/// service returns reaches the client unchanged.
///
/// # Response Format
///
/// ```json
/// {
///   "code": 500,
///   "message": "Failed to connect to DB"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
pub struct AppError {
    /// HTTP status code to respond with
    pub code: u16,

    /// Human-readable error message
    pub message: String,
}

impl AppError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND.as_u16(), message)
    }

    /// 500 Internal Server Error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), message)
    }

    /// 422 Unprocessable Entity
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY.as_u16(), message)
    }

    /// 400 Bad Request, used for bodies that cannot be decoded.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST.as_u16(), message)
    }

    /// Response status for this error.
    ///
    /// Codes that are not valid HTTP statuses fall back to 500.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Convert AppError into an HTTP response.
///
/// The status comes from [`AppError::status`] and the body is the error
/// itself serialized as JSON.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

//! Secure Error Handling
//!
//! Error responses carry a single `error` field with a client-safe message.
//! Internal details (driver errors, signing failures) are logged server-side
//! and never serialized into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Application error with a client-safe message and optional internal detail.
#[derive(Debug)]
pub struct AppError {
    /// Error category, determines the HTTP status code
    pub kind: ErrorKind,
    /// Message safe to return to the caller
    pub message: String,
    /// Internal detail, logged but never exposed
    internal: Option<String>,
}

/// Error categories with their HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input (400)
    BadRequest,
    /// Credentials did not match a stored record (401)
    Unauthorized,
    /// Store or signing failure (500); detail is withheld from the caller
    Internal,
}

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Create a bad request error (400)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::BadRequest,
            message: message.into(),
            internal: None,
        }
    }

    /// Create an unauthorized error (401)
    ///
    /// The same message is used whether the email was unknown or the
    /// password was wrong, so the response does not reveal which accounts
    /// exist.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            message: message.into(),
            internal: None,
        }
    }

    /// Create an internal error (500).
    ///
    /// The caller always sees `Server error`; the detail is logged when the
    /// response is produced.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: "Server error".into(),
            internal: Some(detail.into()),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        AppError::internal(err.to_string())
    }
}

/// JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(detail) = &self.internal {
            error!(detail = %detail, "request failed");
        }

        let status = self.kind.status_code();
        let body = ErrorBody {
            error: self.message,
        };
        (status, Json(body)).into_response()
    }
}

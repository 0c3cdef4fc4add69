/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from HTTP handlers and converted to the JSON
 * error envelope.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Unparsable JSON bodies
 * - Unknown routes
 *
 * ## Validation Errors
 *
 * Shared validation errors (missing title, malformed id) are wrapped as-is.
 *
 * ## Store Errors
 *
 * Storage failures. An unknown id is the client's mistake and maps to 400;
 * unavailable storage maps to 500.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::books::store::BookStoreError;
use crate::shared::SharedError;

/// Message returned for any request that matches no API route
pub const UNKNOWN_ROUTE: &str = "Unknown route";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use bookshelf::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::unknown_route();
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., malformed body, unknown route)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Storage error
    #[error(transparent)]
    StoreError(#[from] BookStoreError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// The catch-all error for unmatched API routes
    pub fn unknown_route() -> Self {
        Self::handler(StatusCode::BAD_REQUEST, UNKNOWN_ROUTE)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - `StoreError` - 400 for an unknown id, 500 when storage is unavailable
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(err) => match err {
                BookStoreError::NotFound { .. } => StatusCode::BAD_REQUEST,
                BookStoreError::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the error message placed in the `error` field of the envelope
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.detail().to_string(),
            Self::StoreError(err) => err.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

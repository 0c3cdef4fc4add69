//! API Client Errors
//!
//! Every failed request ends up as one [`ApiError`]. The mutation
//! coordinator does not distinguish between the variants: any error means
//! the mutation failed and must be rolled back. The variants exist so that
//! presentation code can phrase the failure.

use thiserror::Error;

/// Failure of a single API request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server, or the connection dropped
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status
    #[error("Request failed ({status}): {message}")]
    Server {
        status: u16,
        /// The `error` field of the envelope, or the raw body
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {message}")]
    Decode { message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Human-readable message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message } | Self::Server { message, .. } | Self::Decode { message } => {
                message
            }
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

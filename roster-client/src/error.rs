//! Client error types

use reqwest::StatusCode;
use shared::ErrorBody;
use thiserror::Error;

/// Client error type
///
/// Variants built from an error response carry the server's `error`
/// message verbatim, so `to_string()` is what a user should see.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Request rejected (400): validation, duplicate email, bad salary
    #[error("{0}")]
    Rejected(String),

    /// Server failure (5xx)
    #[error("{0}")]
    Server(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build an error from a non-success status and the raw response body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body.to_string()
                }
            });

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            s if s.is_client_error() => ClientError::Rejected(message),
            s if s.is_server_error() => ClientError::Server(message),
            _ => ClientError::InvalidResponse(message),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

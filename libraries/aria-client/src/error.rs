//! Error types for the Aria client.

use thiserror::Error;

/// Errors that can occur when talking to an Aria server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Input failed validation before any request was issued
    #[error(transparent)]
    Validation(#[from] aria_core::AriaError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

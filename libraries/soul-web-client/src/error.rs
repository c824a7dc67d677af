//! Error types for the web API client.

use thiserror::Error;

/// Errors that can occur when calling the web API.
#[derive(Error, Debug)]
pub enum WebClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request context was cancelled
    #[error("Request cancelled")]
    Cancelled,

    /// The request context deadline passed
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The API answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to decode the response body
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Contains check answered with a different number of flags than IDs sent
    #[error("Expected {expected} results, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// The token source could not produce a bearer token
    #[error("Credentials unavailable: {0}")]
    Credentials(String),
}

impl WebClientError {
    /// True for `Cancelled` and `DeadlineExceeded`.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for WebClientError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result type for web client operations.
pub type Result<T> = std::result::Result<T, WebClientError>;

//! Error types for the Alertwire client
//!
//! Every operation returns either a fully populated result or a single
//! `Error` describing the first failure encountered. No error is retried
//! inside the library; all are terminal for that call.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Alertwire client.
#[derive(Debug, Error)]
pub enum Error {
    /// The request struct could not be converted to JSON. Raised before any
    /// network activity.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body did not parse into the expected response shape.
    #[error("failed to deserialize response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The response status differed from the single expected code for the
    /// operation. Carries the actual status and the raw body text verbatim.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code actually received
        status: u16,
        /// Raw response body text, for diagnostics
        body: String,
    },

    /// Network or connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided or constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Missing or unusable credentials at client construction time.
    #[error("authentication error: {0}")]
    Authentication(String),
}

impl Error {
    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error happened before or during transport, i.e. the
    /// server never produced a response for this call.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Connection(_) | Error::Timeout(_) | Error::InvalidUrl(_) | Error::HttpClient(_)
        )
    }
}

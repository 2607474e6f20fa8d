//! Error types for the market data client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for every upstream call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The transport failed before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The body was not valid JSON or did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Rejected locally before anything was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl FetchError {
    /// Status code carried by an `HttpStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the client.
pub type Result<T> = std::result::Result<T, FetchError>;

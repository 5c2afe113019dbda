//! Errors raised by upstream HTTP clients.

use thiserror::Error;

/// Failure of a call to an upstream API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The upstream answered with a non-success status code.
    #[error("Status error: {1} (Status {0})")]
    Status(reqwest::StatusCode, String),
    /// The upstream answered, but not with the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The call was rejected before reaching the upstream.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for upstream calls.
pub type ClientResult<T> = Result<T, ClientError>;

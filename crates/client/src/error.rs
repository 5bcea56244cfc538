//! Client error types.

use thiserror::Error;

/// Failures while fetching users from the API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

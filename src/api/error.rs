//! Transport-level errors for trivia API calls

use thiserror::Error;

/// Failure of a single API request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS)
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

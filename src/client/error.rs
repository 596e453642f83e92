//! Errors surfaced by the flight HTTP client.

use reqwest::StatusCode;

use crate::error::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The addressed flight does not exist (404), or the id could not be resolved.
    #[error("Flight not found: {0}")]
    NotFound(String),

    /// The server rejected the request (other 4xx), usually a malformed payload.
    #[error("Bad request: {}", .0.message)]
    BadRequest(ErrorBody),

    #[error("Server error: {0}")]
    Server(StatusCode),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),

    /// Connection or decoding failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Returns true if the failure is a missing flight.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

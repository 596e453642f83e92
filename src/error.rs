//! Application error type and its HTTP representation.
//!
//! Every failure is recovered at the operation boundary and rendered as a JSON
//! body of the form:
//!
//! ```json
//! { "message": "Object is not a valid Flight.", "exception": "expected value at line 1 column 1" }
//! ```

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Message returned when the `{id}` path segment is not an integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid flight id.";

/// JSON error body returned to API consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The payload could not be parsed into the expected shape.
    #[error("{message}: {exception}")]
    MalformedInput { message: String, exception: String },

    /// A lookup or replace addressed an id with no matching record.
    #[error("{message}")]
    NotFound {
        message: String,
        exception: Option<String>,
    },

    #[error("{message}")]
    Internal {
        message: String,
        exception: Option<String>,
    },
}

impl AppError {
    pub fn malformed(message: impl Into<String>, exception: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
            exception: exception.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            exception: None,
        }
    }

    pub fn internal(message: impl Into<String>, exception: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            exception,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedInput { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the serializable body without consuming the status.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            AppError::MalformedInput { message, exception } => ErrorBody {
                message: message.clone(),
                exception: Some(exception.clone()),
            },
            AppError::NotFound { message, exception }
            | AppError::Internal { message, exception } => ErrorBody {
                message: message.clone(),
                exception: exception.clone(),
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::malformed(INVALID_ID_MESSAGE, rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_maps_to_bad_request() {
        let err = AppError::malformed("Object is not a valid Flight.", "EOF while parsing");

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = serde_json::to_value(err.to_error_body()).unwrap();
        assert_eq!(body["message"], "Object is not a valid Flight.");
        assert_eq!(body["exception"], "EOF while parsing");
    }

    #[test]
    fn test_not_found_omits_exception() {
        let err = AppError::not_found("Flight 7 does not exist.");

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = serde_json::to_value(err.to_error_body()).unwrap();
        assert_eq!(body["message"], "Flight 7 does not exist.");
        assert!(body.get("exception").is_none());
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let err = AppError::internal("Store unavailable", None);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Error types for the Noteboard server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nb_core::StoreError;
use thiserror::Error;

/// Result type alias for the server.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while serving the note API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Any store failure, conflict included.
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    /// Lookup targeted a missing id.
    #[error("Note not found: {id}")]
    NotFound { id: String },

    /// The request body failed the typed boundary (missing field, wrong
    /// type, malformed JSON).
    #[error("Invalid request body: {reason}")]
    InvalidBody { reason: String },

    /// Configuration error (startup only).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Server startup error.
    #[error("Server error: {0}")]
    Server(String),
}

impl IntoResponse for ApiError {
    /// Request-level failures collapse to an empty-bodied 400: callers
    /// cannot distinguish not-found from conflict from backend failure.
    /// The cause is only logged.
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Store(e) => {
                tracing::error!(error = %e, "Store failure");
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { id } => {
                tracing::warn!(%id, "Note not found");
                StatusCode::BAD_REQUEST
            }
            Self::InvalidBody { reason } => {
                tracing::warn!(%reason, "Rejected request body");
                StatusCode::BAD_REQUEST
            }
            Self::Configuration(msg) | Self::Server(msg) => {
                tracing::error!(message = %msg, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = ApiError::Store(StoreError::Backend {
            reason: "query failed".to_string(),
        });
        assert_eq!(err.to_string(), "Store failure: Store backend error: query failed");
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound {
            id: "note-1".to_string(),
        };
        assert_eq!(err.to_string(), "Note not found: note-1");
    }

    #[test]
    fn test_request_failures_map_to_400() {
        for err in [
            ApiError::Store(StoreError::Conflict {
                id: "dup".to_string(),
            }),
            ApiError::NotFound {
                id: "gone".to_string(),
            },
            ApiError::InvalidBody {
                reason: "missing title".to_string(),
            },
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_startup_failures_map_to_500() {
        let response = ApiError::Configuration("PORT unparsable".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

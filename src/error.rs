//! Error types for API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::path::PathBuf;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors surfaced by inventory operations
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("LoRA not found: {query}")]
    NotFound { query: String },

    #[error("filename is required")]
    MissingFilename,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            InventoryError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            InventoryError::MissingFilename => (StatusCode::BAD_REQUEST, self.to_string()),
            InventoryError::Io { .. } => {
                tracing::error!(error = %self, "Hash failure");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            InventoryError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_query() {
        let err = InventoryError::NotFound {
            query: "missing.safetensors".to_string(),
        };
        assert_eq!(err.to_string(), "LoRA not found: missing.safetensors");
    }

    #[test]
    fn status_mapping() {
        let cases = [
            (
                InventoryError::NotFound {
                    query: "x".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (InventoryError::MissingFilename, StatusCode::BAD_REQUEST),
            (
                InventoryError::Io {
                    path: PathBuf::from("/tmp/x"),
                    source: std::io::Error::other("boom"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), expected);
        }
    }
}

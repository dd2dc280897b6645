use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::classify::ClassifyError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resume text was empty or whitespace-only; nothing was classified.
    #[error("Please enter resume text.")]
    EmptyInput,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassifyError),

    #[error("Classification timed out after {}ms", .0.as_millis())]
    ClassificationTimeout(Duration),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyInput => (StatusCode::BAD_REQUEST, "EMPTY_INPUT", self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Classification(e) => {
                tracing::error!("Classification error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLASSIFICATION_ERROR",
                    "The job category could not be predicted".to_string(),
                )
            }
            AppError::ClassificationTimeout(limit) => {
                tracing::warn!("Classification exceeded {}ms", limit.as_millis());
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "CLASSIFICATION_TIMEOUT",
                    "The job category prediction took too long".to_string(),
                )
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The requested file could not be rendered".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

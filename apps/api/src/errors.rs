use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Errors the pipeline reports as values. Lookup misses never reach here:
/// every table has a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VeraError {
    #[error("VERA not initialized. Call initialize() first.")]
    NotInitialized,

    #[error("Content type '{0}' not supported. Available: story, color-palette, voice-guide, sensory-design")]
    UnsupportedContentType(String),
}

impl Serialize for VeraError {
    /// Serializes as `{"error": "<message>"}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json!({ "error": self.to_string() }).serialize(serializer)
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Vera(#[from] VeraError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Vera(VeraError::NotInitialized) => (
                StatusCode::CONFLICT,
                "NOT_INITIALIZED",
                VeraError::NotInitialized.to_string(),
            ),
            AppError::Vera(e @ VeraError::UnsupportedContentType(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
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

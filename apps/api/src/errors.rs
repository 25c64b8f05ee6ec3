use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("LLM call failed: {0}")]
    Provider(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("A generation is already in progress for session '{0}'")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Provider(e.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Configuration(e.to_string())
    }
}

impl AppError {
    /// Status code and machine-readable code for this error.
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
            AppError::Provider(_) => (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR"),
            AppError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "GENERATION_IN_PROGRESS"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();

        let message = match &self {
            AppError::Validation(msg) | AppError::Configuration(msg) => msg.clone(),
            // Provider messages are surfaced verbatim so the user sees what went wrong upstream.
            AppError::Provider(msg) => {
                tracing::warn!("LLM provider error: {msg}");
                format!("LLM call failed: {msg}")
            }
            AppError::Conflict(_) => self.to_string(),
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                "The PDF could not be generated".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
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

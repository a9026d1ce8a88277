use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("URL not found: {0}")]
    UrlNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Short code already exists: {0}")]
    ShortCodeExists(String),

    #[error("Short code generation failed")]
    ShortCodeGenerationFailed,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError to HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Redirect misses are plain text, everything else is JSON
            AppError::UrlNotFound(code) => {
                tracing::debug!("Unknown short code: {}", code);
                (StatusCode::NOT_FOUND, "URL not found").into_response()
            }
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::ShortCodeExists(code) => (
                StatusCode::CONFLICT,
                Json(json!({ "error": format!("Short code already exists: {}", code) })),
            )
                .into_response(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Database error occurred" })),
                )
                    .into_response()
            }
            AppError::Migration(e) => {
                tracing::error!("Migration error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Migration error occurred" })),
                )
                    .into_response()
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_plain_text_404() {
        let response = AppError::UrlNotFound("abc123".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_is_400() {
        let response = AppError::Validation("URL is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_failure_is_500() {
        let response = AppError::ShortCodeGenerationFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

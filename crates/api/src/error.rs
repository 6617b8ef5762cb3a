use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sanggar_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sanggar_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The record store failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::UnknownCategory {
                    field,
                    value,
                    allowed,
                } => {
                    details = Some(json!({
                        "field": field,
                        "value": value,
                        "allowed": allowed,
                    }));
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "UNKNOWN_CATEGORY",
                        core.to_string(),
                    )
                }
                CoreError::NotReady(msg) => {
                    tracing::warn!(reason = %msg, "Estimation requested while models are not loaded");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "SERVICE_NOT_READY",
                        "Estimation models are not loaded".to_string(),
                    )
                }
                CoreError::ModelLoad(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Record store ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    "The estimate history could not be accessed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

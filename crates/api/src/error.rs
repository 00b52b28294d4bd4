use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cinedex_core::error::CoreError;
use cinedex_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage-level error from `cinedex_db`.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            // A store-level rejection raised before any write is a domain
            // error wearing a storage coat.
            AppError::Store(StoreError::Invalid(core)) => classify_core_error(core),

            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a domain error into an HTTP status, error code, and message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::MalformedCursor(msg) => {
            (StatusCode::BAD_REQUEST, "MALFORMED_CURSOR", msg.clone())
        }
        CoreError::InvalidCursorMode { .. } => (
            StatusCode::BAD_REQUEST,
            "INVALID_CURSOR_MODE",
            err.to_string(),
        ),
    }
}

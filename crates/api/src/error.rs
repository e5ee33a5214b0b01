use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] with two JSON shapes:
///
/// - 404 `{ "message": "<Entity> not found", "error": true }`
/// - 400 `{ "error": "<message>" }` for everything else
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                not_found(format!("{entity} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) => bad_request(msg),
            AppError::Database(sqlx::Error::RowNotFound) => not_found("Resource not found".into()),
            AppError::Database(err) => {
                tracing::warn!(error = %err, "Database error");
                bad_request(err.to_string())
            }
            AppError::BadRequest(msg) => bad_request(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn not_found(message: String) -> Response {
    let body = json!({
        "message": message,
        "error": true,
    });
    (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
}

fn bad_request(message: String) -> Response {
    let body = json!({ "error": message });
    (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
}

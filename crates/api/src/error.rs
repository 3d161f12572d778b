use aethera_chain::ChainError;
use aethera_core::error::CoreError;
use aethera_db::DbError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and the store and chain errors that
/// may carry one. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `aethera_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the store (domain rule, SQLite or blob encoding).
    #[error(transparent)]
    Store(#[from] DbError),

    /// An error from the mock chain.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// The request body was not valid JSON for the expected shape.
    #[error("Invalid request body: {0}")]
    Json(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The domain error at the bottom of this error, if there is one.
    fn as_core(&self) -> Option<&CoreError> {
        match self {
            AppError::Core(core)
            | AppError::Store(DbError::Core(core))
            | AppError::Chain(ChainError::Core(core))
            | AppError::Chain(ChainError::Store(DbError::Core(core))) => Some(core),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.as_core() {
            Some(core) => classify_core_error(core),
            None => match &self {
                AppError::Json(rejection) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    rejection.body_text(),
                ),
                other => {
                    tracing::error!(error = %other, "Internal error");
                    internal_error()
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, error code, and message.
fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

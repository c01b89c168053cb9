//! Mapping from service errors to HTTP responses.
//!
//! # Design
//! Handlers return `Result<_, ApiError>` and use `?`; the `From` impl plus
//! `IntoResponse` keep the status-code/body mapping in one place. Storage
//! failures are logged server-side and answered with a generic detail body —
//! filesystem errors are not the client's business.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use todo_core::TodoError;

/// Wrapper turning a `TodoError` into the HTTP response the contract fixes.
#[derive(Debug)]
pub struct ApiError(TodoError);

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            TodoError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Todo not found" })),
            )
                .into_response(),
            TodoError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": detail })),
            )
                .into_response(),
            TodoError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal storage error" })),
                )
                    .into_response()
            }
        }
    }
}

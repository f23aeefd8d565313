use axum::response::{IntoResponse, Response};

use super::AppError;

/// Router fallback for paths no route matches.
pub async fn not_found() -> Response {
    AppError::RouteNotFound.into_response()
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}

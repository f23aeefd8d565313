pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::http::JsonResponse;

/// Error body returned for every non-2xx response.
///
/// ```json
/// { "error": "invalid JSON (pos 12)" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Client errors carry the message that is sent back verbatim. Server errors
/// carry detail for the log only; the client sees a generic message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0:?}")]
    UnsupportedMediaType(String),

    #[error("Payload too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: usize },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::InvalidBody(_) => ErrorCode::InvalidJson,
            AppError::BadRequest(_) => ErrorCode::ValidationError,
            AppError::UnsupportedMediaType(_) => ErrorCode::UnsupportedMediaType,
            AppError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::RouteNotFound => ErrorCode::RouteNotFound,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    /// Message written into the response body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidBody(msg) | AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::UnsupportedMediaType(_) => messages::UNSUPPORTED_MEDIA_TYPE.to_string(),
            AppError::PayloadTooLarge { .. } => messages::PAYLOAD_TOO_LARGE.to_string(),
            AppError::RouteNotFound => messages::ROUTE_NOT_FOUND.to_string(),
            AppError::MethodNotAllowed => messages::METHOD_NOT_ALLOWED.to_string(),
            AppError::ServiceUnavailable(_) => messages::SERVICE_UNAVAILABLE.to_string(),
            AppError::InternalServerError(_) => messages::INTERNAL_ERROR.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), "{}", self);
        } else {
            tracing::info!(error_code = code.code(), "{}", self);
        }

        error_response(status, self.public_message())
    }
}

/// Writes `{"error": message}` with the given status.
///
/// A 2xx status is never an error; it is coerced to 500.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let status = if status.is_success() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        status
    };
    JsonResponse(status, ErrorResponse::new(message)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::JSON_CONTENT_TYPE;
    use axum::http::header;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_error_message_is_sent_verbatim() {
        let response = AppError::InvalidBody("invalid JSON (pos 3)".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
        assert_eq!(body_of(response).await.error, "invalid JSON (pos 3)");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            AppError::InternalServerError("connection refused on 10.0.0.1".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "internal error");
    }

    #[tokio::test]
    async fn test_success_status_is_coerced_to_500() {
        let response = error_response(StatusCode::OK, "boom");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "boom");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::UnsupportedMediaType("text/plain".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::PayloadTooLarge { limit: 10 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(AppError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::ServiceUnavailable("draining".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}

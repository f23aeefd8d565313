//! JSON response writer.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::ErrorCode;

/// Content type set on every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const INTERNAL_ERROR_BODY: &[u8] = br#"{"error":"internal error"}"#;

/// A JSON body paired with its status code.
///
/// Unlike `axum::Json`, the content type always carries `charset=utf-8`, and
/// the payload is serialized up front so a failure still produces exactly one
/// status line (a 500 with a generic error body).
///
/// ```ignore
/// async fn create() -> JsonResponse<Product> {
///     JsonResponse(StatusCode::CREATED, product)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonResponse<T>(pub StatusCode, pub T);

impl<T> JsonResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self(StatusCode::OK, payload)
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let JsonResponse(status, payload) = self;
        match serde_json::to_vec(&payload) {
            Ok(body) => json_bytes(status, body),
            Err(err) => {
                tracing::error!(
                    error_code = ErrorCode::SerdeJsonError.code(),
                    "Failed to serialize response body: {}",
                    err
                );
                json_bytes(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_BODY.to_vec(),
                )
            }
        }
    }
}

fn json_bytes(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response()
}

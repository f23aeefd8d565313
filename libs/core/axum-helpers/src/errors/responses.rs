//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "internal error" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed JSON or rejected payload",
    content_type = "application/json",
    example = json!({ "error": "invalid JSON (pos 17)" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "não encontrado" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Content-Type is not application/json",
    content_type = "application/json",
    example = json!({ "error": "Content-Type must be application/json" })
)]
pub struct UnsupportedMediaTypeResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body exceeds 1 MiB",
    content_type = "application/json",
    example = json!({ "error": "request body too large" })
)]
pub struct PayloadTooLargeResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service is shutting down or a dependency is unreachable",
    content_type = "application/json",
    example = json!({ "error": "service unavailable" })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);

//! Type-safe error codes for structured logs.
//!
//! The wire body only carries a human-readable message; these codes tag the
//! log line emitted for every error response so failures can be grouped.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidJson;
//! assert_eq!(code.as_str(), "INVALID_JSON");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Domain validation rejected the payload
    ValidationError,

    /// Request body is not a well-formed, well-typed JSON document
    InvalidJson,

    /// Request body has a non-JSON content type
    UnsupportedMediaType,

    /// Request body exceeded the size cap
    PayloadTooLarge,

    /// Requested resource was not found
    NotFound,

    /// No route matched the request path
    RouteNotFound,

    /// Route exists but not for this method
    MethodNotAllowed,

    // Server errors (9000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// Response body could not be serialized
    SerdeJsonError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 9000-9999: Server errors
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::UnsupportedMediaType => 1003,
            Self::PayloadTooLarge => 1004,
            Self::NotFound => 1005,
            Self::RouteNotFound => 1006,
            Self::MethodNotAllowed => 1007,

            // Server errors (9000s)
            Self::InternalError => 9001,
            Self::ServiceUnavailable => 9002,
            Self::SerdeJsonError => 9003,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

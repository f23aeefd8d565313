//! Client-facing error messages.
//!
//! 4xx messages may name fields or byte offsets. 5xx messages never carry
//! internal detail.

pub const EMPTY_BODY: &str = "empty body";
pub const INVALID_JSON: &str = "invalid JSON";
pub const TRUNCATED_JSON: &str = "invalid JSON (truncated)";
pub const SINGLE_JSON_VALUE: &str = "only one JSON object is allowed";
pub const UNREADABLE_BODY: &str = "could not read body";
pub const UNSUPPORTED_MEDIA_TYPE: &str = "Content-Type must be application/json";
pub const PAYLOAD_TOO_LARGE: &str = "request body too large";
pub const ROUTE_NOT_FOUND: &str = "not found";
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const SERVICE_UNAVAILABLE: &str = "service unavailable";
pub const INTERNAL_ERROR: &str = "internal error";

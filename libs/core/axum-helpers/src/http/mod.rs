//! HTTP response helpers.

pub mod json;

pub use json::{JSON_CONTENT_TYPE, JsonResponse};

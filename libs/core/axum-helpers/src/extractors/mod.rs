//! Custom extractors for Axum handlers.

pub mod id_path;
pub mod strict_json;

pub use id_path::IdPath;
pub use strict_json::{MAX_BODY_BYTES, StrictJson, check_content_type, decode_json, read_body};

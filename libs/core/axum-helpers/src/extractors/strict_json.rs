//! Strict JSON body extractor.
//!
//! Bodies are capped at [`MAX_BODY_BYTES`], must be a single JSON value, and
//! may not contain fields the target type does not declare (the target type
//! opts into this with `#[serde(deny_unknown_fields)]`). Every failure is
//! classified into a client-safe message.

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::errors::{AppError, messages};

/// Upper bound on request body size (1 MiB).
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// JSON extractor with strict decoding.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::StrictJson;
///
/// async fn create(StrictJson(product): StrictJson<Product>) -> String {
///     product.name
/// }
///
/// let app = Router::new().route("/produtos", post(create));
/// ```
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type = content_type(req.headers())?;
        check_content_type(content_type.as_deref())?;
        let bytes = read_body(req.into_body(), MAX_BODY_BYTES).await?;
        decode_json(content_type.as_deref(), &bytes).map(StrictJson)
    }
}

fn content_type(headers: &HeaderMap) -> Result<Option<String>, AppError> {
    match headers.get(header::CONTENT_TYPE) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|ct| Some(ct.to_string()))
            .map_err(|_| {
                AppError::UnsupportedMediaType(String::from_utf8_lossy(value.as_bytes()).into())
            }),
    }
}

/// Rejects a present, non-empty content type that is not `application/json`.
///
/// Runs before the body is read, so an oversized upload of the wrong type is
/// still a 415.
pub fn check_content_type(content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some(ct) if !ct.is_empty() && !ct.starts_with("application/json") => {
            Err(AppError::UnsupportedMediaType(ct.to_string()))
        }
        _ => Ok(()),
    }
}

/// Reads the whole body, failing once more than `limit` bytes arrive.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, AppError> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            Err(AppError::PayloadTooLarge { limit })
        }
        Err(err) => {
            tracing::debug!("Failed to read request body: {}", err);
            Err(AppError::InvalidBody(messages::UNREADABLE_BODY.to_string()))
        }
    }
}

/// Decodes exactly one JSON value from `bytes`.
///
/// `content_type` is the raw header value, if any. An absent or empty content
/// type is accepted. A top-level array is rejected even though serde lets
/// structs deserialize from a sequence.
pub fn decode_json<T: DeserializeOwned>(
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<T, AppError> {
    check_content_type(content_type)?;

    if bytes.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[') {
        return Err(AppError::InvalidBody(messages::INVALID_JSON.to_string()));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde_path_to_error::deserialize(&mut de)
        .map_err(|err| AppError::InvalidBody(classify(bytes, &err)))?;

    de.end()
        .map_err(|_| AppError::InvalidBody(messages::SINGLE_JSON_VALUE.to_string()))?;

    Ok(value)
}

fn classify(bytes: &[u8], err: &serde_path_to_error::Error<serde_json::Error>) -> String {
    let inner = err.inner();
    match inner.classify() {
        Category::Eof if bytes.iter().all(u8::is_ascii_whitespace) => {
            messages::EMPTY_BODY.to_string()
        }
        Category::Eof => messages::TRUNCATED_JSON.to_string(),
        Category::Syntax => format!(
            "invalid JSON (pos {})",
            byte_offset(bytes, inner.line(), inner.column())
        ),
        Category::Data => {
            let message = inner.to_string();
            if let Some(field) = quoted_field(&message, "unknown field `") {
                return format!("unknown field \"{field}\"");
            }
            if let Some(field) = quoted_field(&message, "duplicate field `") {
                return format!("duplicate field \"{field}\"");
            }
            if err.path().iter().next().is_none() {
                return messages::INVALID_JSON.to_string();
            }
            format!(
                "invalid type for field \"{}\" (pos {})",
                err.path(),
                byte_offset(bytes, inner.line(), inner.column())
            )
        }
        Category::Io => messages::UNREADABLE_BODY.to_string(),
    }
}

fn quoted_field<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    message
        .strip_prefix(prefix)?
        .split('`')
        .next()
}

/// Converts serde_json's 1-based line and column into a byte offset.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = bytes
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    preceding + column
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default, deny_unknown_fields)]
    struct Item {
        nome: String,
        preco: f64,
        quantidade: i32,
    }

    fn message(result: Result<Item, AppError>) -> String {
        match result.unwrap_err() {
            AppError::InvalidBody(msg) => msg,
            other => panic!("expected InvalidBody, got {other:?}"),
        }
    }

    #[test]
    fn test_decodes_valid_object() {
        let item: Item = decode_json(
            Some("application/json"),
            br#"{"nome":"Caneta","preco":2.5,"quantidade":100}"#,
        )
        .unwrap();

        assert_eq!(
            item,
            Item {
                nome: "Caneta".into(),
                preco: 2.5,
                quantidade: 100
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let item: Item = decode_json(None, br#"{"nome":"Caneta"}"#).unwrap();

        assert_eq!(item.preco, 0.0);
        assert_eq!(item.quantidade, 0);
    }

    #[test]
    fn test_content_type_with_charset_is_accepted() {
        let item: Result<Item, _> =
            decode_json(Some("application/json; charset=utf-8"), br#"{}"#);
        assert!(item.is_ok());

        let item: Result<Item, _> = decode_json(Some(""), br#"{}"#);
        assert!(item.is_ok());
    }

    #[test]
    fn test_non_json_content_type_is_rejected() {
        let err = decode_json::<Item>(Some("text/plain"), br#"{}"#).unwrap_err();

        assert!(matches!(err, AppError::UnsupportedMediaType(ref ct) if ct == "text/plain"));
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_empty_and_whitespace_bodies() {
        assert_eq!(message(decode_json(None, b"")), "empty body");
        assert_eq!(message(decode_json(None, b"  \n\t ")), "empty body");
    }

    #[test]
    fn test_truncated_body() {
        assert_eq!(
            message(decode_json(None, br#"{"nome":"Caneta""#)),
            "invalid JSON (truncated)"
        );
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let msg = message(decode_json(None, br#"{"nome": }"#));

        assert_eq!(msg, "invalid JSON (pos 10)");
    }

    #[test]
    fn test_unknown_field_is_named() {
        let msg = message(decode_json(None, br#"{"nome":"a","cor":"azul"}"#));

        assert_eq!(msg, "unknown field \"cor\"");
    }

    #[test]
    fn test_type_mismatch_names_field_and_position() {
        let msg = message(decode_json(None, br#"{"nome":"a","preco":"caro"}"#));

        assert_eq!(msg, "invalid type for field \"preco\" (pos 26)");
    }

    #[test]
    fn test_top_level_type_mismatch_is_generic() {
        assert_eq!(message(decode_json(None, b"42")), "invalid JSON");
        assert_eq!(message(decode_json(None, br#""Caneta""#)), "invalid JSON");
    }

    #[test]
    fn test_positional_array_is_rejected() {
        assert_eq!(
            message(decode_json(None, br#"["Caneta",2.5,100]"#)),
            "invalid JSON"
        );
        assert_eq!(message(decode_json(None, b" \n[1,2]")), "invalid JSON");
    }

    #[test]
    fn test_duplicate_field_is_named() {
        let msg = message(decode_json(None, br#"{"nome":"a","nome":"b"}"#));

        assert_eq!(msg, "duplicate field \"nome\"");
    }

    #[test]
    fn test_check_content_type() {
        assert!(check_content_type(None).is_ok());
        assert!(check_content_type(Some("")).is_ok());
        assert!(check_content_type(Some("application/json; charset=utf-8")).is_ok());
        assert!(matches!(
            check_content_type(Some("text/plain")),
            Err(AppError::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn test_trailing_value_is_rejected() {
        let msg = message(decode_json(
            None,
            br#"{"nome":"a","preco":1}{"x":1}"#,
        ));

        assert_eq!(msg, "only one JSON object is allowed");
    }

    #[test]
    fn test_trailing_whitespace_is_accepted() {
        let item: Result<Item, _> = decode_json(None, b"{\"nome\":\"a\"}\n\n");
        assert!(item.is_ok());
    }

    #[test]
    fn test_byte_offset_spans_lines() {
        let body = b"{\n  \"a\": 1,\n  x";

        assert_eq!(byte_offset(body, 1, 1), 1);
        // "{\n" and "  \"a\": 1,\n" precede line 3
        assert_eq!(byte_offset(body, 3, 3), 2 + 10 + 3);
    }

    #[tokio::test]
    async fn test_read_body_within_limit() {
        let bytes = read_body(Body::from("hello"), 16).await.unwrap();

        assert_eq!(&bytes[..], b"hello");
    }

    #[tokio::test]
    async fn test_read_body_over_limit_is_payload_too_large() {
        let err = read_body(Body::from(vec![b' '; 17]), 16).await.unwrap_err();

        assert!(matches!(err, AppError::PayloadTooLarge { limit: 16 }));
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_read_body_stream_error_is_unreadable() {
        let stream = futures::stream::iter(vec![
            Ok(Bytes::from_static(b"{\"nome\"")),
            Err(std::io::Error::other("connection reset")),
        ]);

        let err = read_body(Body::from_stream(stream), 16).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidBody(ref msg) if msg == "could not read body"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}

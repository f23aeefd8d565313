//! Numeric id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a positive-or-zero `i64` id in the last path segment.
///
/// A segment that is not a decimal integer means the path names no resource,
/// so the rejection is a plain 404 rather than a 400.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn show(IdPath(id): IdPath) -> String {
///     format!("product {id}")
/// }
///
/// let app = Router::new().route("/produtos/{id}", get(show));
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound)?;

        parse_id(&raw).map(IdPath).ok_or(AppError::RouteNotFound)
    }
}

/// Parses a decimal id, tolerating a single trailing slash.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.strip_suffix('/').unwrap_or(raw).parse().ok()
}

//! # Axum Helpers
//!
//! Shared building blocks for the HTTP layer.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` taxonomy and the `{"error": ...}` response writer
//! - **[`extractors`]**: strict JSON body decoding and numeric id path segments
//! - **[`http`]**: JSON responses with an explicit UTF-8 content type
//! - **[`server`]**: router assembly and serving with bounded graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{ShutdownCoordinator, create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     let (coordinator, _rx) = ShutdownCoordinator::new();
//!     create_production_app(router, &ServerConfig::default(), coordinator, async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{ShutdownCoordinator, create_production_app, create_router, serve_listener};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, MAX_BODY_BYTES, StrictJson, decode_json};

// Re-export HTTP helpers
pub use http::{JSON_CONTENT_TYPE, JsonResponse};

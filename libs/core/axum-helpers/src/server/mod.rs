//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the OpenAPI document and a JSON 404 fallback
//! - Serving with graceful shutdown bounded by a drain timeout
//! - Shutdown coordination shared with readiness probes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{ShutdownCoordinator, create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes);
//! let (coordinator, _rx) = ShutdownCoordinator::new();
//! create_production_app(router, &config.server, coordinator, async {}).await?;
//! ```

pub mod app;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_production_app, create_router, serve_listener};
pub use shutdown::ShutdownCoordinator;

//! Application state management

use axum_helpers::ShutdownCoordinator;
use database::postgres::DatabaseConnection;
use domain_products::ProductPages;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
    pub pages: ProductPages,
    pub shutdown: ShutdownCoordinator,
}

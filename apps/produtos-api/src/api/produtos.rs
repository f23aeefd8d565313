//! Produtos routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create the products router backed by PostgreSQL
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::with_timeout(
        state.db.clone(),
        state.config.database.query_timeout(),
    );
    let service = ProductService::new(repository);
    handlers::router(service, state.pages.clone())
}

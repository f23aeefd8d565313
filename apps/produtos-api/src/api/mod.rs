//! API routes module

pub mod health;
pub mod produtos;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(produtos::router(state))
        .merge(health::router(state.clone()))
}

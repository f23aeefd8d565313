//! Produtos API - product catalogue over PostgreSQL

use axum_helpers::server::{ShutdownCoordinator, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::ProductPages;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // Variables already present in the environment win over .env entries
    let dotenv = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    info!("Connecting to PostgreSQL");
    let db = database::postgres::connect_from_config(config.database.clone()).await?;

    // Templates are compiled once, before the first request
    let pages = ProductPages::new()?;

    let (shutdown, _rx) = ShutdownCoordinator::new();
    let state = AppState {
        config: config.clone(),
        db,
        pages,
        shutdown: shutdown.clone(),
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state));

    info!("Starting Produtos API on {}", config.server.address());

    let db = state.db.clone();
    create_production_app(router, &config.server, shutdown, async move {
        info!("Shutting down: closing PostgreSQL pool");
        match db.close().await {
            Ok(()) => info!("PostgreSQL pool closed"),
            Err(e) => warn!("Failed to close PostgreSQL pool: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Produtos API shutdown complete");
    Ok(())
}

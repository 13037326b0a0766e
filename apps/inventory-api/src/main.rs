use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    // Connect to PostgreSQL with retry
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Apply pending migrations before serving traffic
    database::postgres::run_migrations::<migration::Migrator>(&db, "inventory_api")
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    // Initialize the application state
    let state = AppState { config, db };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // create_router adds docs and the middleware stack to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual database health check
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    let server_config = state.config.server.clone();

    info!("Starting inventory API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown; state moves into the
    // cleanup closure
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}

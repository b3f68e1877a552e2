//! Products API - in-memory product catalog over REST

use axum_helpers::{cors_layer_from_env, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{InMemoryProductRepository, ProductRepository};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let repository = if config.seed_catalog {
        InMemoryProductRepository::seeded()
    } else {
        InMemoryProductRepository::new()
    };

    let state = AppState {
        config: config.clone(),
        repository,
    };

    let cors = cors_layer_from_env(&config.environment)?;
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, cors);
    let app = router.merge(health_router(config.app));

    info!(
        environment = ?config.environment,
        seeded = config.seed_catalog,
        "Starting Products API on {}",
        config.server.address()
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        let remaining = state.repository.count().await.unwrap_or_default();
        info!(
            service = state.config.app.name,
            products = remaining,
            "Discarding in-memory catalog"
        );
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

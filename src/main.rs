//! Maintrack Server - maintenance tracking dashboard backend

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maintrack::{
    api,
    config::AppConfig,
    store::{seed::SeedData, MaintenanceStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("maintrack={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Maintrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Load seed data into the store
    let seed = SeedData::load(config.store.seed_path.as_deref())?;
    let store = MaintenanceStore::new(seed);

    tracing::info!(
        "Store ready: {} equipment, {} teams, {} requests",
        store.equipment().len(),
        store.teams().len(),
        store.requests().len()
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state and router
    let state = AppState::new(config, store);
    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

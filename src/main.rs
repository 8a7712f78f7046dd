// Initialize configuration
// Set up logging
// Initialize cache
// Create shared state
// Start HTTP server

use nft_cache_service::{api, cache, config::Config, state::AppState};

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting nft-cache-service");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    // Initialize cache
    let nft_cache = cache::NftCacheManager::from_config(&config)?;
    tracing::info!(
        "Cache initialized with price TTL: {:?} and capacity: {}",
        config.price_cache_ttl,
        config.price_cache_capacity
    );

    // Create shared state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        cache: Arc::new(nft_cache),
    });

    // Start HTTP server
    let app = api::create_router(app_state);
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

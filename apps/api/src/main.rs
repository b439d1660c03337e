mod config;
mod errors;
mod images;
mod llm_client;
mod market;
mod routes;
mod state;
mod survey;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::images::{DisabledImageProvider, ImageProvider, UnsplashProvider};
use crate::llm_client::GeminiClient;
use crate::market::MarketClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Navigator API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(config.google_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize image collaborator — disabled when no key is configured
    let images: Arc<dyn ImageProvider> = match &config.unsplash_access_key {
        Some(key) => {
            info!("Unsplash image provider initialized");
            Arc::new(UnsplashProvider::new(key.clone()))
        }
        None => {
            warn!("UNSPLASH_ACCESS_KEY not set — profession images disabled");
            Arc::new(DisabledImageProvider)
        }
    };

    // Initialize market catalog client
    let market = MarketClient::new();

    // Build app state
    let state = AppState {
        llm,
        images,
        market,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use crate::config::Config;
use crate::images::ImageProvider;
use crate::llm_client::GeminiClient;
use crate::market::MarketClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
    /// Pluggable image collaborator. UnsplashProvider when a key is
    /// configured, DisabledImageProvider otherwise.
    pub images: Arc<dyn ImageProvider>,
    pub market: MarketClient,
    pub config: Config,
}

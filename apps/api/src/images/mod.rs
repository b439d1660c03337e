//! Image collaborator — looks up an illustrative photo per profession.
//!
//! Pluggable, trait-based provider carried in `AppState` as
//! `Arc<dyn ImageProvider>`. Lookups never error outward: any failure is
//! logged and collapses to `None`, and a missing image never blocks the
//! recommendation it belongs to.

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";

/// Provider of illustrative image URLs for free-text queries.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Best-effort lookup. `None` on miss or any failure.
    async fn lookup(&self, query: &str) -> Option<String>;
}

// ────────────────────────────────────────────────────────────────────────────
// Unsplash provider
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: Option<String>,
    regular: Option<String>,
}

impl SearchResponse {
    /// First result's `small` URL, falling back to `regular`.
    fn first_url(self) -> Option<String> {
        let urls = self.results.into_iter().next()?.urls;
        urls.small.or(urls.regular)
    }
}

/// Unsplash-backed provider: one landscape photo per query, sampled from a
/// random result page so repeated surveys do not all show the same image.
pub struct UnsplashProvider {
    client: Client,
    access_key: String,
}

impl UnsplashProvider {
    pub fn new(access_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            access_key,
        }
    }
}

#[async_trait]
impl ImageProvider for UnsplashProvider {
    async fn lookup(&self, query: &str) -> Option<String> {
        let page = rand::thread_rng().gen_range(1..=5).to_string();

        let response = self
            .client
            .get(UNSPLASH_SEARCH_URL)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", "landscape"),
                ("page", page.as_str()),
            ])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("image lookup failed for {query:?}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "image lookup for {query:?} returned {}",
                response.status()
            );
            return None;
        }

        match response.json::<SearchResponse>().await {
            Ok(body) => {
                let url = body.first_url();
                if url.is_none() {
                    warn!("no image results for {query:?} (page {page})");
                }
                url
            }
            Err(e) => {
                warn!("image lookup response for {query:?} unreadable: {e}");
                None
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Disabled provider
// ────────────────────────────────────────────────────────────────────────────

/// Provider used when no image service is configured. Every lookup misses.
pub struct DisabledImageProvider;

#[async_trait]
impl ImageProvider for DisabledImageProvider {
    async fn lookup(&self, _query: &str) -> Option<String> {
        None
    }
}

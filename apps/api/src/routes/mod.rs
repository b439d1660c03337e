pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::market;
use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Survey API
        .route(
            "/api/v1/survey/recommendations",
            post(handlers::handle_recommendations),
        )
        .route("/api/v1/survey/roadmap", post(handlers::handle_roadmap))
        // Market catalog
        .route("/api/v1/market/roles", get(market::handle_list_roles))
        .with_state(state)
}

//! Labour-market catalog — a thin pass-through of the HeadHunter public
//! professional-roles directory.

use axum::{extract::State, Json};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

const HH_API_BASE_URL: &str = "https://api.hh.ru";

/// A professional role, possibly with nested sub-roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_incomplete_resumes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

/// A top-level role category grouping related roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCategory {
    pub id: String,
    pub name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
struct RolesResponse {
    categories: Vec<RoleCategory>,
}

#[derive(Debug, Serialize)]
pub struct RolesListResponse {
    pub categories: Vec<RoleCategory>,
}

/// Client for the HeadHunter public API.
#[derive(Clone)]
pub struct MarketClient {
    client: Client,
}

impl MarketClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Fetches the professional-roles catalog.
    pub async fn professional_roles(&self) -> Result<Vec<RoleCategory>, AppError> {
        let response = self
            .client
            .get(format!("{HH_API_BASE_URL}/professional_roles"))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("HH API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "HH API request failed with status {status}"
            )));
        }

        let body: RolesResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("HH API returned unreadable body: {e}")))?;

        Ok(body.categories)
    }
}

impl Default for MarketClient {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /api/v1/market/roles
///
/// Lists professional role categories from the HH public directory.
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<RolesListResponse>, AppError> {
    let categories = state.market.professional_roles().await?;
    Ok(Json(RolesListResponse { categories }))
}

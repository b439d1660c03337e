//! Axum route handlers for the survey API.
//!
//! The handlers own the request/response boundary: input validation, the AI
//! call, and attaching images. Everything between raw AI text and enriched
//! records is delegated to the pure pipeline modules.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::survey::enrich::enrich_recommendations;
use crate::survey::json_extract::extract_json_array;
use crate::survey::markdown::clean_markdown;
use crate::survey::parser::parse_recommendations;
use crate::survey::prompts::{build_recommend_prompt, build_roadmap_prompt};
use crate::survey::roadmap::{enrich_roadmap, parse_steps};
use crate::survey::types::{
    EnrichedRecommendation, EnrichedRoadmapStep, ProblemApproach, WorkStyle,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub skills: String,
    pub interests: String,
    pub work_style: WorkStyle,
    pub problem_approach: ProblemApproach,
    #[serde(default)]
    pub critical_skill: Option<String>,
}

/// The raw AI text rides along so the caller can render it verbatim when
/// `recommendations` comes back empty despite a non-empty response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Vec<EnrichedRecommendation>,
    pub raw_response: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub profession_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub steps: Vec<EnrichedRoadmapStep>,
    pub raw_response: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/survey/recommendations
///
/// Full recommendation pipeline: validate → AI call → extract → parse →
/// enrich → attach images. Unusable AI text is not an error — it yields an
/// empty list alongside the raw text.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    if request.skills.trim().is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }
    if request.interests.trim().is_empty() {
        return Err(AppError::Validation("interests cannot be empty".to_string()));
    }

    let prompt = build_recommend_prompt(
        &request.skills,
        &request.interests,
        request.work_style,
        request.problem_approach,
    );

    let raw = state
        .llm
        .generate_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("recommendation call failed: {e}")))?;

    let records = parse_recommendations(extract_json_array(&raw));
    info!("parsed {} recommendation(s) from AI response", records.len());

    let critical_skill = request.critical_skill.as_deref().unwrap_or("");
    let mut recommendations = enrich_recommendations(records, critical_skill);

    attach_images(&state, &mut recommendations).await;

    Ok(Json(RecommendationsResponse {
        recommendations,
        raw_response: raw,
    }))
}

/// POST /api/v1/survey/roadmap
///
/// Roadmap pipeline: validate → AI call → parse steps → enrich. Noisy or
/// unusable roadmap text yields an empty step list alongside the raw text.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let profession_name = clean_markdown(&request.profession_name);
    if profession_name.is_empty() {
        return Err(AppError::Validation(
            "professionName cannot be empty".to_string(),
        ));
    }

    let prompt = build_roadmap_prompt(&profession_name);
    let raw = state
        .llm
        .generate_text(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("roadmap call for {profession_name:?} failed: {e}")))?;

    let parsed = parse_steps(&raw);
    let steps = enrich_roadmap(&parsed);
    info!(
        "roadmap for {profession_name:?}: {} step(s) parsed",
        steps.len()
    );

    Ok(Json(RoadmapResponse {
        steps,
        raw_response: raw,
    }))
}

/// Runs image lookups for all recommendations concurrently and attaches each
/// result to its originating record by id, not completion order. A failed or
/// missing lookup leaves `image_url` unset. In-flight lookups are aborted if
/// the request is dropped.
async fn attach_images(state: &AppState, recommendations: &mut [EnrichedRecommendation]) {
    let mut lookups = JoinSet::new();
    for rec in recommendations.iter() {
        let images = state.images.clone();
        let query = format!("{} workplace professional", rec.profession_name);
        let id = rec.id;
        lookups.spawn(async move { (id, images.lookup(&query).await) });
    }

    let mut by_id: HashMap<Uuid, Option<String>> = HashMap::new();
    while let Some(joined) = lookups.join_next().await {
        if let Ok((id, url)) = joined {
            by_id.insert(id, url);
        }
    }

    for rec in recommendations.iter_mut() {
        rec.image_url = by_id.remove(&rec.id).flatten();
    }
}

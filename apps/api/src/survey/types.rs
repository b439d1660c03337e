//! Data model for the survey pipeline: parsed AI recommendations, enriched
//! recommendations, and enriched roadmap steps.
//!
//! Wire names are camelCase — they match the JSON contract the AI is prompted
//! for, so parsed AI output and our own responses share one vocabulary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity/flavor of an advisory note attached during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Info,
    Tip,
}

/// A single advisory note. Insights accumulate in rule order and are never
/// reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Warning,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Info,
            text: text.into(),
        }
    }

    pub fn tip(text: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Tip,
            text: text.into(),
        }
    }
}

/// Per-recommendation breakdown of which profile aspects the AI matched.
///
/// Admitted only as a whole: the source object must carry all three lists as
/// arrays, otherwise the field is treated as absent (see `parser`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingFactors {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub preferences: Vec<String>,
}

impl MatchingFactors {
    /// Total number of factor items across all three lists.
    pub fn total_items(&self) -> usize {
        self.skills.len() + self.interests.len() + self.preferences.len()
    }
}

/// A single validated profession recommendation, post-parse and pre-enrichment.
/// `profession_name` and `justification` are non-empty in the source item and
/// cleaned of markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub profession_name: String,
    /// Absent when the AI omitted the score or supplied one outside [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    pub justification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_factors: Option<MatchingFactors>,
}

/// A recommendation decorated with heuristic scoring and advisory notes.
/// Transient: created per survey submission, replaced wholesale by the next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecommendation {
    /// Process-unique, generated at enrichment time.
    pub id: Uuid,
    pub profession_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    pub justification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_factors: Option<MatchingFactors>,
    pub custom_insights: Vec<Insight>,
    /// Seeded from `match_score` (70 when absent), mutated by heuristic
    /// deltas, clamped to [0, 100].
    pub adjusted_match_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession_type_guess: Option<String>,
    /// Attached by the image collaborator after enrichment; a failed lookup
    /// leaves this `None` and never blocks the recommendation.
    pub image_url: Option<String>,
}

/// Category assigned to a roadmap step by the keyword scan.
///
/// `GeneralTip` and `Default` carry no keywords — they are only ever assigned
/// by the positional/fallback rules in `roadmap::enrich_roadmap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    Learning,
    Practice,
    Networking,
    PortfolioResume,
    CareerMilestone,
    GeneralTip,
    Default,
}

/// A roadmap step decorated with a category and advisory notes.
/// Same lifecycle as `EnrichedRecommendation`: per fetch, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRoadmapStep {
    pub id: Uuid,
    pub text: String,
    pub step_type: StepType,
    pub insights: Vec<Insight>,
    /// True for portfolio/resume and career-milestone steps.
    pub is_major_milestone: bool,
}

/// Preferred working arrangement from the survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Team,
    Solo,
    Any,
}

/// Preferred problem-solving style from the survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemApproach {
    Creative,
    Analytical,
    Any,
}

//! Heuristic enrichment of parsed recommendations.
//!
//! Every rule is total over its inputs — enrichment cannot fail. Rules run in
//! a fixed order and only ever append insights (the order of insights on a
//! record is the order the rules fired), and every score mutation is clamped
//! into [0, 100] before the record is returned.

use uuid::Uuid;

use crate::survey::markdown::clean_markdown;
use crate::survey::types::{EnrichedRecommendation, Insight, RecommendationRecord};

/// Score assigned when the AI omitted `matchScore`.
const DEFAULT_MATCH_SCORE: f64 = 70.0;
/// Bonus/penalty for the user's critical skill being evidenced or not.
const CRITICAL_SKILL_BONUS: f64 = 10.0;
const CRITICAL_SKILL_PENALTY: f64 = 15.0;
/// Low-information thresholds: fewer factor items than this AND a short
/// justification trigger the limited-detail warning.
const FACTOR_COUNT_THRESHOLD: usize = 2;
const JUSTIFICATION_LENGTH_THRESHOLD: usize = 80;
const LOW_INFO_PENALTY: f64 = 7.0;
/// The low-information penalty only applies while the score is above this.
const LOW_INFO_SCORE_FLOOR: f64 = 40.0;
/// Skills + interests overlap beyond this count earns a bonus.
const HIGH_INFO_FACTOR_COUNT: usize = 4;
const HIGH_INFO_BONUS: f64 = 5.0;

const TECHNICAL_IT: &str = "Technical / IT";
const ANALYTICAL_BUSINESS: &str = "Analytical / Business";
/// The phrase gating the narrow IT-over-Analytical suppression below.
const DATA_ANALYST_PHRASE: &str = "аналитик данных";

/// IT keywords live outside the table because the Analytical/Business
/// tie-break consults them directly.
const IT_KEYWORDS: &[&str] = &[
    "разработчик",
    "инженер",
    "программист",
    "developer",
    "software engineer",
    "data scientist",
    "аналитик данных",
    "data analyst",
    "machine learning",
    "ai specialist",
    "devops",
    "тестировщик",
    "qa engineer",
    "системный администратор",
];

/// Ordered profession-type table, consulted first-match-wins. Ordering is
/// semantically meaningful: IT is checked before Analytical/Business, which
/// resolves names like "аналитик данных" in favor of IT. Keywords cover both
/// English and Russian because the AI answers in either.
const PROFESSION_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    (TECHNICAL_IT, IT_KEYWORDS),
    (
        ANALYTICAL_BUSINESS,
        &[
            "аналитик",
            "analyst",
            "бизнес-аналитик",
            "системный аналитик",
            "финансовый аналитик",
            "маркетинговый аналитик",
        ],
    ),
    (
        "Creative / Media",
        &[
            "дизайнер",
            "designer",
            "ui/ux",
            "graphic designer",
            "web designer",
            "художник",
            "иллюстратор",
            "писатель",
            "копирайтер",
            "редактор",
            "сценарист",
            "музыкант",
            "content creator",
            "animator",
            "фотограф",
            "видеограф",
        ],
    ),
    (
        "Managerial / Organizational",
        &[
            "менеджер",
            "manager",
            "product manager",
            "project manager",
            "руководитель",
            "директор",
            "координатор",
            "администратор",
            "team lead",
            "scrum master",
            "продюсер",
        ],
    ),
    (
        "Social / Service / Consulting",
        &[
            "учитель",
            "преподаватель",
            "тренер",
            "коуч",
            "врач",
            "доктор",
            "медсестра",
            "психолог",
            "консультант",
            "юрист",
            "адвокат",
            "hr",
            "human resources",
            "рекрутер",
            "customer support",
            "service",
            "специалист по работе с клиентами",
            "социальный работник",
            "event manager",
        ],
    ),
    (
        "Marketing / PR / Advertising",
        &[
            "маркетолог",
            "marketing",
            "seo",
            "smm",
            "pr",
            "public relations",
            "таргетолог",
            "специалист по рекламе",
            "brand manager",
            "ppc",
        ],
    ),
];

/// Guesses a profession type from the name via the ordered keyword table.
///
/// Narrow tie-break, preserved as observed rather than generalized: a name is
/// not classified Analytical/Business when it also matches an IT keyword that
/// itself contains the data-analyst phrase — the scan moves on instead. Since
/// the IT category is consulted first, such names have already been claimed
/// by IT by the time the Analytical row is reached.
pub fn classify_profession(name: &str) -> Option<&'static str> {
    let name_lower = name.to_lowercase();
    for &(category, keywords) in PROFESSION_TYPE_KEYWORDS {
        if keywords.iter().any(|kw| name_lower.contains(kw)) {
            if category == ANALYTICAL_BUSINESS && matches_it_data_analyst(&name_lower) {
                continue;
            }
            return Some(category);
        }
    }
    None
}

fn matches_it_data_analyst(name_lower: &str) -> bool {
    IT_KEYWORDS
        .iter()
        .any(|kw| name_lower.contains(kw) && kw.contains(DATA_ANALYST_PHRASE))
}

/// Applies the heuristic rule sequence to each record. Deterministic given
/// identical inputs, except for the generated ids.
pub fn enrich_recommendations(
    records: Vec<RecommendationRecord>,
    critical_skill_input: &str,
) -> Vec<EnrichedRecommendation> {
    let critical_skill = clean_markdown(&critical_skill_input.trim().to_lowercase());
    records
        .into_iter()
        .map(|record| enrich_one(record, critical_skill_input.trim(), &critical_skill))
        .collect()
}

fn enrich_one(
    record: RecommendationRecord,
    critical_skill_display: &str,
    critical_skill: &str,
) -> EnrichedRecommendation {
    let mut insights: Vec<Insight> = Vec::new();
    let mut score = record
        .match_score
        .map(f64::from)
        .unwrap_or(DEFAULT_MATCH_SCORE);

    // Rule 1: critical-skill evidence check
    if !critical_skill.is_empty() {
        let evidenced = record
            .matching_factors
            .as_ref()
            .map(|factors| {
                factors
                    .skills
                    .iter()
                    .any(|skill| clean_markdown(skill).to_lowercase().contains(critical_skill))
            })
            .unwrap_or(false);

        if evidenced {
            insights.push(Insight::info(format!(
                "Great news! This profession makes use of your critical skill: {critical_skill_display}."
            )));
            score = (score + CRITICAL_SKILL_BONUS).min(100.0);
        } else {
            insights.push(Insight::warning(format!(
                "No explicit use of your critical skill \"{critical_skill_display}\" was indicated."
            )));
            score = (score - CRITICAL_SKILL_PENALTY).max(0.0);
        }
    }

    // Rule 2: profession-type guess
    let profession_type_guess = classify_profession(&record.profession_name);
    match profession_type_guess {
        Some(profession_type) => insights.push(Insight::info(format!(
            "Likely profession type: {profession_type}."
        ))),
        None => insights.push(Insight::info(
            "The type of this profession could not be determined.",
        )),
    }

    // Rule 3: limited-detail warning
    let justification_len = record.justification.chars().count();
    let low_information = match &record.matching_factors {
        Some(factors) => {
            factors.total_items() < FACTOR_COUNT_THRESHOLD
                && justification_len < JUSTIFICATION_LENGTH_THRESHOLD
        }
        None => justification_len < JUSTIFICATION_LENGTH_THRESHOLD,
    };
    if low_information {
        insights.push(Insight::warning(
            "The AI provided limited detail for this recommendation.",
        ));
        if score > LOW_INFO_SCORE_FLOOR {
            score = (score - LOW_INFO_PENALTY).max(0.0);
        }
    }

    // Rule 4: strong skill/interest overlap
    if let Some(factors) = &record.matching_factors {
        if factors.skills.len() + factors.interests.len() > HIGH_INFO_FACTOR_COUNT {
            insights.push(Insight::info(
                "Many of your skills and interests align with this profession!",
            ));
            score = (score + HIGH_INFO_BONUS).min(100.0);
        }
    }

    EnrichedRecommendation {
        id: Uuid::new_v4(),
        profession_name: record.profession_name,
        match_score: record.match_score,
        justification: record.justification,
        matching_factors: record.matching_factors,
        custom_insights: insights,
        adjusted_match_score: score.round().clamp(0.0, 100.0) as u8,
        profession_type_guess: profession_type_guess.map(str::to_string),
        image_url: None,
    }
}

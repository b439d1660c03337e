//! Roadmap text parsing and per-step enrichment.
//!
//! The AI returns a numbered list as free text. Parsing reduces it to clean
//! step strings; enrichment classifies each step and attaches advisory notes.
//! Rules apply independently per step — the only cross-step state is the
//! step's position (first/last index).

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::survey::markdown::clean_markdown;
use crate::survey::types::{EnrichedRoadmapStep, Insight, InsightKind, StepType};

/// A single leading ordinal ("3.") or bullet marker, with trailing spacing.
static STEP_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.|[*\-•✓✔✖✗])\s*").unwrap());

/// Lines at or below this length after cleaning are dropped as noise.
const MIN_STEP_CHARS: usize = 3;
/// Steps shorter than this that stay unclassified get a terseness warning.
const TERSE_STEP_CHARS: usize = 25;

/// Ordered keyword table for step classification, consulted first-match-wins.
/// `general_tip` and `default` carry no keywords — they are assigned only by
/// the positional and fallback rules in `enrich_roadmap`.
const ROADMAP_STEP_KEYWORDS: &[(StepType, &[&str])] = &[
    (
        StepType::Learning,
        &[
            "изучить",
            "курс",
            "книг",
            "документац",
            "learn",
            "course",
            "book",
            "documentation",
            "tutorial",
            "освоить",
            "урок",
            "лекци",
            "семинар",
            "вебинар",
            "прочитать",
            "исследовать",
            "понять",
            "разобраться",
            "теория",
            "основы",
        ],
    ),
    (
        StepType::Practice,
        &[
            "практика",
            "проект",
            "задач",
            "создать",
            "practice",
            "project",
            "task",
            "build",
            "develop",
            "написать",
            "реализовать",
            "применить",
            "упражнени",
            "лабораторн",
            "кодить",
            "пет-проект",
        ],
    ),
    (
        StepType::PortfolioResume,
        &[
            "портфолио",
            "github",
            "резюме",
            "cv",
            "portfolio",
            "resume",
            "профил",
            "проекты для резюме",
            "сопроводительное письмо",
            "cover letter",
        ],
    ),
    (
        StepType::Networking,
        &[
            "сообществ",
            "конференци",
            "митап",
            "networking",
            "community",
            "conference",
            "meetup",
            "связи",
            "знакомств",
            "форум",
            "общаться",
            "linkedin",
            "профессиональная сеть",
        ],
    ),
    (
        StepType::CareerMilestone,
        &[
            "сертификац",
            "экзамен",
            "certification",
            "exam",
            "работ",
            "job",
            "фриланс",
            "freelance",
            "стажировк",
            "internship",
            "собеседован",
            "interview",
            "ваканси",
            "устроитьс",
            "найти работу",
            "получить должность",
            "оффер",
        ],
    ),
];

/// Splits free roadmap text into discrete step strings: one step per line,
/// ordinal/bullet prefix stripped, markdown cleaned, noise lines (≤ 3 chars)
/// dropped. Order preserved.
pub fn parse_steps(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.lines()
        .map(|line| STEP_PREFIX_RE.replace(line.trim(), "").into_owned())
        .map(|line| clean_markdown(&line))
        .filter(|line| line.chars().count() > MIN_STEP_CHARS)
        .collect()
}

/// Classifies a step via the ordered keyword table; `Default` when nothing
/// matches.
pub fn classify_step(text: &str) -> StepType {
    let text_lower = text.to_lowercase();
    for (step_type, keywords) in ROADMAP_STEP_KEYWORDS {
        if keywords.iter().any(|kw| text_lower.contains(kw)) {
            return *step_type;
        }
    }
    StepType::Default
}

/// Enriches parsed steps with categories, milestone flags, and advisory
/// notes. Every rule is total — this function cannot fail.
///
/// For a single-step roadmap the rules apply in their stated order: the step
/// gets the first-step prepended tip, the last-step bonus does not fire (it
/// requires more than one step), and the terseness warning cannot fire —
/// the first-step rule has already reassigned an unclassified step to
/// `general_tip` before the terseness check runs.
pub fn enrich_roadmap(steps: &[String]) -> Vec<EnrichedRoadmapStep> {
    let total = steps.len();
    steps
        .iter()
        .enumerate()
        .map(|(index, text)| enrich_step(text, index, total))
        .collect()
}

fn enrich_step(text: &str, index: usize, total: usize) -> EnrichedRoadmapStep {
    let mut step_type = classify_step(text);
    let mut insights: Vec<Insight> = Vec::new();
    let mut is_major_milestone = false;

    match step_type {
        StepType::Learning => insights.push(Insight::info("Active learning of new material.")),
        StepType::Practice => insights.push(Insight::info("Applying knowledge in practice.")),
        StepType::PortfolioResume => {
            insights.push(Insight::tip("Keep your portfolio and resume up to date."));
            is_major_milestone = true;
        }
        StepType::Networking => {
            insights.push(Insight::tip("Engage with professional communities."));
        }
        StepType::CareerMilestone => {
            insights.push(Insight::info("An important career milestone."));
            is_major_milestone = true;
        }
        StepType::GeneralTip | StepType::Default => {}
    }

    if index == 0 {
        insights.insert(0, Insight::tip("Start this journey with enthusiasm!"));
        if step_type == StepType::Default {
            step_type = StepType::GeneralTip;
        }
    }

    if index == total - 1 && total > 1 {
        insights.push(Insight::tip("Well done, keep growing!"));
        if step_type == StepType::Default {
            step_type = StepType::GeneralTip;
        }
    }

    if text.chars().count() < TERSE_STEP_CHARS
        && step_type == StepType::Default
        && !is_major_milestone
    {
        insights.push(Insight::warning(
            "This step is described tersely. Clarify the details.",
        ));
    }

    if step_type == StepType::Default
        && insights.iter().any(|insight| insight.kind == InsightKind::Tip)
    {
        step_type = StepType::GeneralTip;
    }

    EnrichedRoadmapStep {
        id: Uuid::new_v4(),
        text: text.to_string(),
        step_type,
        insights,
        is_major_milestone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_steps("").is_empty());
        assert!(parse_steps("  \n \n").is_empty());
    }

    #[test]
    fn test_parse_strips_numbered_prefixes() {
        let parsed = parse_steps("1. Learn Python basics\n2. Build a project");
        assert_eq!(parsed, vec!["Learn Python basics", "Build a project"]);
    }

    #[test]
    fn test_parse_strips_bullet_prefixes() {
        let parsed = parse_steps("* First thing\n- Second thing\n• Third thing\n✓ Fourth thing");
        assert_eq!(
            parsed,
            vec!["First thing", "Second thing", "Third thing", "Fourth thing"]
        );
    }

    #[test]
    fn test_parse_strips_only_one_prefix() {
        let parsed = parse_steps("1. 2. Double numbered");
        assert_eq!(parsed, vec!["2. Double numbered"]);
    }

    #[test]
    fn test_parse_drops_noise_lines() {
        let parsed = parse_steps("1. Learn SQL well\n2. ok\n- \n3. Build something real");
        assert_eq!(parsed, vec!["Learn SQL well", "Build something real"]);
    }

    #[test]
    fn test_parse_cleans_markdown() {
        let parsed = parse_steps("1. Learn **Python** basics");
        assert_eq!(parsed, vec!["Learn Python basics"]);
    }

    #[test]
    fn test_classify_learning() {
        assert_eq!(classify_step("Learn Python basics"), StepType::Learning);
        assert_eq!(classify_step("Изучить основы SQL"), StepType::Learning);
    }

    #[test]
    fn test_classify_first_match_wins() {
        // Contains both a learning keyword ("course") and a milestone keyword
        // ("certification"); Learning is consulted first.
        assert_eq!(
            classify_step("Take a course and get a certification"),
            StepType::Learning
        );
    }

    #[test]
    fn test_classify_unmatched_is_default() {
        assert_eq!(classify_step("Think about your future"), StepType::Default);
    }

    #[test]
    fn test_roadmap_scenario_from_numbered_text() {
        let parsed = parse_steps("1. Learn Python basics\n2. Build a project\n- Get a certification");
        assert_eq!(parsed.len(), 3);

        let enriched = enrich_roadmap(&parsed);

        // First step: learning, with the enthusiasm tip prepended
        assert_eq!(enriched[0].step_type, StepType::Learning);
        assert_eq!(enriched[0].insights[0].kind, InsightKind::Tip);
        assert!(enriched[0].insights[0].text.contains("enthusiasm"));
        assert_eq!(enriched[0].insights[1].kind, InsightKind::Info);

        // Middle step: practice
        assert_eq!(enriched[1].step_type, StepType::Practice);
        assert!(!enriched[1].is_major_milestone);

        // Last step: career milestone, major, with the keep-growing tip appended
        assert_eq!(enriched[2].step_type, StepType::CareerMilestone);
        assert!(enriched[2].is_major_milestone);
        let last = enriched[2].insights.last().unwrap();
        assert_eq!(last.kind, InsightKind::Tip);
        assert!(last.text.contains("keep growing"));
    }

    #[test]
    fn test_portfolio_step_is_major_milestone() {
        let enriched = enrich_roadmap(&steps(&[
            "Learn the fundamentals of design",
            "Add three case studies to your portfolio",
            "Apply for a junior position at a studio",
        ]));
        assert_eq!(enriched[1].step_type, StepType::PortfolioResume);
        assert!(enriched[1].is_major_milestone);
        assert!(enriched[1]
            .insights
            .iter()
            .any(|i| i.kind == InsightKind::Tip && i.text.contains("portfolio")));
    }

    #[test]
    fn test_networking_step_gets_tip() {
        let enriched = enrich_roadmap(&steps(&[
            "Learn the basics of testing",
            "Join a local meetup and talk to people",
            "Find your first job in QA",
        ]));
        assert_eq!(enriched[1].step_type, StepType::Networking);
        assert!(!enriched[1].is_major_milestone);
        assert_eq!(enriched[1].insights[0].kind, InsightKind::Tip);
    }

    #[test]
    fn test_first_default_step_becomes_general_tip() {
        let enriched = enrich_roadmap(&steps(&[
            "Decide what excites you the most right now",
            "Learn the basics of the field",
        ]));
        assert_eq!(enriched[0].step_type, StepType::GeneralTip);
    }

    #[test]
    fn test_last_default_step_becomes_general_tip() {
        let enriched = enrich_roadmap(&steps(&[
            "Learn the basics of the field",
            "Stay curious and keep at it every single day",
        ]));
        assert_eq!(enriched[1].step_type, StepType::GeneralTip);
        let last = enriched[1].insights.last().unwrap();
        assert!(last.text.contains("keep growing"));
    }

    /// Single-step precedence decision: first-step tip fires, last-step bonus
    /// does not (requires more than one step), and the terseness warning is
    /// preempted — the first-step rule reassigns `default` to `general_tip`
    /// before the terseness check runs.
    #[test]
    fn test_single_step_gets_first_tip_only() {
        let enriched = enrich_roadmap(&steps(&["Reflect on your goals"]));
        assert_eq!(enriched.len(), 1);
        let step = &enriched[0];
        assert_eq!(step.step_type, StepType::GeneralTip);
        assert_eq!(step.insights, vec![Insight::tip("Start this journey with enthusiasm!")]);
    }

    #[test]
    fn test_terse_unclassified_middle_step_warns() {
        let enriched = enrich_roadmap(&steps(&[
            "Learn the basics of the field",
            "Keep calm always",
            "Find your first job in the field",
        ]));
        assert_eq!(enriched[1].step_type, StepType::Default);
        assert!(enriched[1]
            .insights
            .iter()
            .any(|i| i.kind == InsightKind::Warning && i.text.contains("tersely")));
    }

    #[test]
    fn test_terse_classified_step_does_not_warn() {
        let enriched = enrich_roadmap(&steps(&[
            "Learn the basics of the field",
            "Build a project",
            "Find your first job in the field",
        ]));
        assert_eq!(enriched[1].step_type, StepType::Practice);
        assert!(!enriched[1]
            .insights
            .iter()
            .any(|i| i.kind == InsightKind::Warning));
    }

    #[test]
    fn test_insights_only_accumulate() {
        // Every step ends with at least as many insights as its category rule
        // alone would attach; positional rules only add.
        let parsed = steps(&[
            "Learn the basics of the field",
            "Build a project",
            "Update your resume and apply",
        ]);
        let enriched = enrich_roadmap(&parsed);
        assert!(enriched[0].insights.len() >= 2); // category + first-step tip
        assert!(enriched[1].insights.len() >= 1);
        assert!(enriched[2].insights.len() >= 2); // category + last-step tip
    }

    #[test]
    fn test_each_step_gets_unique_id() {
        let enriched = enrich_roadmap(&steps(&["Learn a lot", "Build a lot"]));
        assert_ne!(enriched[0].id, enriched[1].id);
    }
}

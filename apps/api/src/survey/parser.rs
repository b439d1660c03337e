//! Validation and normalization of raw AI recommendation objects.
//!
//! Items are filtered, never repaired: an item missing a usable
//! `professionName` or `justification` is dropped whole, and a malformed
//! `matchingFactors` is dropped as a field. The surviving subset proceeds —
//! availability over completeness.

use serde_json::{Map, Value};

use crate::survey::markdown::clean_markdown;
use crate::survey::types::{MatchingFactors, RecommendationRecord};

/// Validates raw array items into recommendation records, preserving input
/// order. Malformed items are silently dropped.
pub fn parse_recommendations(items: Vec<Value>) -> Vec<RecommendationRecord> {
    items.into_iter().filter_map(parse_item).collect()
}

fn parse_item(item: Value) -> Option<RecommendationRecord> {
    let obj = item.as_object()?;

    // Both anchor fields must be present as non-empty strings in the source
    // item; cleaning happens after the filter decision.
    let profession_name = usable_string(obj, "professionName")?;
    let justification = usable_string(obj, "justification")?;

    Some(RecommendationRecord {
        profession_name: clean_markdown(profession_name),
        match_score: parse_match_score(obj.get("matchScore")),
        justification: clean_markdown(justification),
        matching_factors: parse_matching_factors(obj.get("matchingFactors")),
    })
}

fn usable_string<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Copies the score only when it is a number within [0, 100]; anything else
/// (missing, out of range, wrong type) leaves the field absent.
fn parse_match_score(value: Option<&Value>) -> Option<u8> {
    let score = value?.as_f64()?;
    if (0.0..=100.0).contains(&score) {
        Some(score.round() as u8)
    } else {
        None
    }
}

/// Shape validator for `matchingFactors`: admitted only when the source is an
/// object whose `skills`, `interests`, and `preferences` are all arrays. Any
/// other shape means the field as a whole is absent — no partial factors.
fn parse_matching_factors(value: Option<&Value>) -> Option<MatchingFactors> {
    let obj = value?.as_object()?;
    Some(MatchingFactors {
        skills: string_list(obj.get("skills")?)?,
        interests: string_list(obj.get("interests")?)?,
        preferences: string_list(obj.get("preferences")?)?,
    })
}

/// Coerces every array element to a string (JSON repr for non-strings) and
/// cleans it. `None` when the value is not an array.
fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => clean_markdown(s),
                other => clean_markdown(&other.to_string()),
            })
            .collect(),
    )
}

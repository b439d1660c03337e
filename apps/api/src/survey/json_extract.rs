//! JSON extraction from loosely structured AI output.
//!
//! The AI is instructed to return a bare JSON array, but real responses come
//! wrapped in code fences, prefixed with prose, or truncated. The extractor
//! locates the first balanced JSON region and parses it, failing soft to an
//! empty list — callers treat an empty list as "nothing usable", never as a
//! distinguishable error.

use serde_json::Value;
use tracing::warn;

/// Extracts and parses the JSON array embedded in `raw`.
///
/// Steps: trim → unwrap a code fence spanning the whole body → if the text is
/// not already a bare `[...]`/`{...}`, scan for the first balanced bracket
/// region → parse. Anything that is not ultimately a JSON array yields `[]`.
pub fn extract_json_array(raw: &str) -> Vec<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let unfenced = unwrap_code_fence(trimmed);

    let candidate = if is_bare_json(unfenced) {
        unfenced
    } else {
        match balanced_region(unfenced) {
            Some(region) => region,
            None => {
                warn!(
                    "no balanced JSON region in AI response: {:?}",
                    truncate(unfenced, 200)
                );
                return Vec::new();
            }
        }
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!("AI response parsed but is not a JSON array: {}", type_name(&other));
            Vec::new()
        }
        Err(err) => {
            warn!(
                "failed to parse extracted JSON: {err}; candidate: {:?}",
                truncate(candidate, 200)
            );
            Vec::new()
        }
    }
}

/// Unwraps ```` ```json ... ``` ```` (or untagged ```` ``` ... ``` ````) when
/// the fence spans the entire body. A fence without a closing delimiter is
/// left alone — the bracket scan below handles it.
fn unwrap_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.trim_start().strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => text,
    }
}

fn is_bare_json(text: &str) -> bool {
    (text.starts_with('[') && text.ends_with(']'))
        || (text.starts_with('{') && text.ends_with('}'))
}

/// Finds the first `[` or `{` (whichever comes first) and walks forward
/// counting nesting of that bracket type until balance returns to zero.
/// Returns the inclusive substring, or `None` when no region balances.
fn balanced_region(text: &str) -> Option<&str> {
    let (start, open, close) = match (text.find('['), text.find('{')) {
        (Some(b), Some(c)) if b < c => (b, b'[', b']'),
        (Some(b), None) => (b, b'[', b']'),
        (_, Some(c)) => (c, b'{', b'}'),
        (None, None) => return None,
    };

    let mut depth = 0i32;
    for (i, &byte) in text.as_bytes().iter().enumerate().skip(start) {
        if byte == open {
            depth += 1;
        }
        if byte == close {
            depth -= 1;
        }
        if depth == 0 {
            return Some(text[start..=i].trim());
        }
    }
    None
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array_parses() {
        let items = extract_json_array(r#"[{"a": 1}, {"a": 2}]"#);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_fenced_array_with_json_tag() {
        let raw = "```json\n[{\"professionName\":\"Designer\",\"justification\":\"Creative fit\"}]\n```";
        let items = extract_json_array(raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["professionName"], "Designer");
    }

    #[test]
    fn test_fenced_array_without_tag() {
        let items = extract_json_array("```\n[1, 2, 3]\n```");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_array_wrapped_in_prose() {
        let raw = "Here are your recommendations: [ {\"a\": 1} ] I hope this helps!";
        let items = extract_json_array(raw);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_prose_with_object_only_returns_empty() {
        // A balanced region that parses to an object, not an array
        let items = extract_json_array("Result: {\"a\": 1} done");
        assert!(items.is_empty());
    }

    #[test]
    fn test_garbage_input_returns_empty() {
        assert!(extract_json_array("Sorry, I cannot help with that.").is_empty());
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(extract_json_array("").is_empty());
        assert!(extract_json_array("   \n  ").is_empty());
    }

    #[test]
    fn test_unbalanced_brackets_return_empty() {
        assert!(extract_json_array("Take this: [ {\"a\": 1}").is_empty());
    }

    #[test]
    fn test_nested_arrays_balance_correctly() {
        let raw = "data: [[1, 2], [3]] trailing";
        let items = extract_json_array(raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_first_bracket_kind_wins() {
        // '[' appears before '{' — the array is the candidate region
        let raw = "noise [1, 2] more {\"a\": 1}";
        let items = extract_json_array(raw);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_brace_before_bracket_selects_object() {
        // '{' first: the object region is extracted, which is not an array
        let raw = "noise {\"a\": [1, 2]} tail";
        assert!(extract_json_array(raw).is_empty());
    }

    #[test]
    fn test_invalid_json_in_balanced_region_returns_empty() {
        assert!(extract_json_array("[{not json}]").is_empty());
    }

    #[test]
    fn test_fence_without_closing_falls_through_to_scan() {
        let raw = "```json\n[{\"a\": 1}]";
        let items = extract_json_array(raw);
        assert_eq!(items.len(), 1);
    }
}

//! Markdown cleanup for free-text strings returned by the AI.
//!
//! The AI is told not to use markdown, but it does anyway: bold/italic
//! emphasis inside profession names, code fences around roadmap fragments,
//! and one recurring garbled pagination artifact. Cleaning is applied to
//! every string that survives parsing.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
// Known generation artifact: a garbled Kazakh pagination fragment that some
// responses append verbatim. Matched exactly, not generalized.
static GLITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i) Klikniдэ (\d+) sanyna basynda nemese qaz\.\s*\[\d+\]").unwrap()
});
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Strips lightweight markdown from a string: `**bold**` and `*italic*`
/// delimiters (inner text kept), fenced code blocks (dropped wholesale,
/// content included), and the known glitch artifact. Trims the result.
///
/// Pure and idempotent for inputs free of the glitch pattern.
pub fn clean_markdown(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = GLITCH_RE.replace_all(&text, "");
    let text = CODE_FENCE_RE.replace_all(&text, "");
    text.trim().to_string()
}

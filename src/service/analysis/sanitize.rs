//! Markdown fence stripping for model replies

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Strip an optional Markdown code fence around a model reply.
///
/// Removes one leading "```json" (or bare "```") marker and one trailing "```"
/// marker, trimming whitespace around them. Unfenced text comes back trimmed
/// and otherwise untouched.
pub fn sanitize(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(JSON_FENCE) {
        text = rest;
    } else if let Some(rest) = text.strip_prefix(FENCE) {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

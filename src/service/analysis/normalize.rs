//! Schema default-fill for model replies
//!
//! The model is asked for strict JSON but compliance is not guaranteed, so
//! normalization never fails: a parsed object is completed with schema
//! defaults, and anything else becomes an all-default result carrying a
//! diagnostic note.

use serde_json::{Map, Value};

use crate::model::{NormalizedResult, ResultSchema};

/// Characters of the offending reply quoted in the diagnostic note
const DIAGNOSTIC_PREFIX_CHARS: usize = 100;

/// Normalize a sanitized reply against `schema`.
///
/// Present fields pass through untouched (no type coercion) and fields outside
/// the schema are kept.
pub fn normalize(sanitized: &str, schema: &ResultSchema) -> NormalizedResult {
    match serde_json::from_str::<Value>(sanitized) {
        Ok(Value::Object(mut fields)) => {
            let mut filled = Vec::new();
            for spec in schema.fields {
                if !fields.contains_key(spec.name) {
                    fields.insert(spec.name.to_string(), spec.default.to_value());
                    filled.push(spec.name);
                }
            }

            if !filled.is_empty() {
                tracing::debug!(fields = ?filled, "Filled missing fields with defaults");
            }

            NormalizedResult::complete(fields)
        }
        Ok(other) => {
            tracing::warn!(
                json_type = json_type(&other),
                "Model reply is JSON but not an object"
            );
            fallback(sanitized, schema)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model reply is not valid JSON");
            fallback(sanitized, schema)
        }
    }
}

/// All-default result with the diagnostic note attached, if the schema has one
fn fallback(sanitized: &str, schema: &ResultSchema) -> NormalizedResult {
    let mut fields: Map<String, Value> = schema.defaults();
    if let Some(diagnostic) = schema.diagnostic {
        fields.insert(
            diagnostic.field.to_string(),
            Value::String(diagnostic_note(diagnostic.message, sanitized)),
        );
    }
    NormalizedResult::degraded(fields)
}

fn diagnostic_note(message: &str, sanitized: &str) -> String {
    let prefix: String = sanitized.chars().take(DIAGNOSTIC_PREFIX_CHARS).collect();
    format!("{message}。元のレスポンス: {prefix}...")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! JSON Schema cleaning for ChatCompletions tool parameters.
//!
//! Upstream validators reject or choke on some draft keywords that Claude
//! clients emit freely. Cleaning never fails: unsupported constructs are
//! dropped, everything else is copied through.

use serde_json::{Map, Value};

/// Keys removed at every nesting level.
const STRIPPED_KEYS: [&str; 2] = ["$schema", "additionalProperties"];

/// `format` values kept on `"type": "string"` nodes.
pub const SUPPORTED_STRING_FORMATS: [&str; 2] = ["date-time", "enum"];

/// Return a cleaned copy of `schema`; the input is left untouched.
///
/// 1. Drops `$schema` and `additionalProperties` at any depth
/// 2. Recurses through objects and arrays; scalars pass through unchanged
/// 3. On a string-typed node, drops `format` unless it is one of
///    [`SUPPORTED_STRING_FORMATS`]
pub fn clean_json_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(clean_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(clean_json_schema).collect()),
        other => other.clone(),
    }
}

fn clean_object(map: &Map<String, Value>) -> Map<String, Value> {
    let mut cleaned: Map<String, Value> = map
        .iter()
        .filter(|(k, _)| !STRIPPED_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), clean_json_schema(v)))
        .collect();

    let is_string_node = cleaned.get("type").and_then(Value::as_str) == Some("string");
    if is_string_node {
        let keep_format = match cleaned.get("format") {
            None => true,
            Some(Value::String(f)) => SUPPORTED_STRING_FORMATS.contains(&f.as_str()),
            Some(_) => false,
        };
        if !keep_format {
            if let Some(dropped) = cleaned.remove("format") {
                tracing::debug!("[JSON-Schema] Dropped unsupported string format {}", dropped);
            }
        }
    }

    cleaned
}

//! Normalization of parsed YAML into the string-keyed generic document shape
//!
//! YAML mappings allow arbitrary scalar keys, so a parsed manifest can carry
//! keys like `true` or `42` where the rest of the pipeline expects strings.
//! Everything that leaves this module is a `serde_json::Value` with string
//! keys at every nesting level.

use crate::Document;
use serde_json::Value;
use serde_yaml::Value as YamlValue;

/// Convert a parsed YAML value into a [`Document`], or `None` if the
/// top-level value is not a mapping.
pub fn yaml_document(value: YamlValue) -> Option<Document> {
    match normalize(value) {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Recursively convert a YAML value into a string-keyed JSON value.
///
/// Non-finite floats (`.nan`, `.inf`) have no JSON representation and
/// normalize to `null`. Tagged values unwrap to their inner value.
pub fn normalize(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => normalize_number(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(seq) => Value::Array(seq.into_iter().map(normalize).collect()),
        YamlValue::Mapping(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(key_string(key), normalize(value));
            }
            Value::Object(out)
        }
        YamlValue::Tagged(tagged) => normalize(tagged.value),
    }
}

fn normalize_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else if let Some(f) = n.as_f64() {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

/// Render a YAML mapping key as a string.
///
/// Scalar keys stringify directly; composite keys (sequences, mappings) fall
/// back to the compact JSON text of their normalized value.
fn key_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => key_string(tagged.value),
        composite => normalize(composite).to_string(),
    }
}

//! Decode-and-merge of the `data` field into `stringData`
//!
//! A resource document may carry a `data` mapping of base64-encoded payloads
//! and/or a `stringData` mapping of plaintext payloads. The transform moves
//! everything into `stringData`: each `data` entry is decoded and inserted
//! unless the key is already present, then `data` is removed. Hand-authored
//! plaintext entries always win over freshly decoded ones.

use crate::error::{Result, TransformError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use kdec_format::Document;
use serde_json::{Map, Value};

/// Decode the `data` mapping of a document and merge it into `stringData`.
///
/// A document without a `data` mapping is left untouched, so the transform
/// is idempotent. All entries are decoded before any are committed: the
/// first non-string or malformed entry aborts with an error naming its key
/// and the document is unchanged.
pub fn decode_secret_data(doc: &mut Document) -> Result<()> {
    let Some(Value::Object(data)) = doc.get("data") else {
        tracing::debug!("data field not found or not a mapping, nothing to decode");
        return Ok(());
    };

    let mut decoded = Vec::with_capacity(data.len());
    for (key, value) in data {
        let Some(text) = value.as_str() else {
            return Err(TransformError::NonStringValue { key: key.clone() });
        };
        let bytes = STANDARD
            .decode(text)
            .map_err(|source| TransformError::InvalidBase64 {
                key: key.clone(),
                source,
            })?;
        // The decoded payload may not be valid UTF-8; invalid sequences are
        // replaced rather than rejected, since both output formats carry
        // text scalars only.
        decoded.push((key.clone(), String::from_utf8_lossy(&bytes).into_owned()));
    }
    tracing::debug!(entries = decoded.len(), "decoded data field");

    if !matches!(doc.get("stringData"), Some(Value::Object(_))) {
        doc.insert("stringData".to_string(), Value::Object(Map::new()));
    }
    if let Some(Value::Object(string_data)) = doc.get_mut("stringData") {
        for (key, text) in decoded {
            if !string_data.contains_key(&key) {
                string_data.insert(key, Value::String(text));
            }
        }
    }

    doc.remove("data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[test]
    fn test_decodes_data_into_string_data() {
        let mut secret = doc(json!({
            "kind": "Secret",
            "data": {"password": "aHVudGVyMg=="}
        }));
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret["stringData"]["password"], "hunter2");
        assert!(!secret.contains_key("data"));
    }

    #[test]
    fn test_existing_string_data_entry_wins() {
        let mut secret = doc(json!({
            "data": {"k1": "ZnJvbS1kYXRh"},
            "stringData": {"k1": "hand-authored", "k2": "value2"}
        }));
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret["stringData"]["k1"], "hand-authored");
        assert_eq!(secret["stringData"]["k2"], "value2");
    }

    #[test]
    fn test_merges_alongside_existing_entries() {
        let mut secret = doc(json!({
            "data": {"k1": "dmFsdWUx"},
            "stringData": {"k2": "value2"}
        }));
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret["stringData"]["k1"], "value1");
        assert_eq!(secret["stringData"]["k2"], "value2");
    }

    #[test]
    fn test_missing_data_is_a_noop() {
        let mut secret = doc(json!({"kind": "ConfigMap", "stringData": {"a": "b"}}));
        let before = secret.clone();
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret, before);
    }

    #[test]
    fn test_non_mapping_data_is_a_noop() {
        let mut secret = doc(json!({"data": "not a mapping"}));
        let before = secret.clone();
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret, before);
    }

    #[test]
    fn test_non_string_value_errors_with_key() {
        let mut secret = doc(json!({"data": {"bad": 42}}));
        let err = decode_secret_data(&mut secret).unwrap_err();
        assert!(matches!(err, TransformError::NonStringValue { ref key } if key == "bad"));
    }

    #[test]
    fn test_malformed_base64_errors_with_key() {
        let mut secret = doc(json!({"data": {"k1": "not-base64!!"}}));
        let err = decode_secret_data(&mut secret).unwrap_err();
        assert!(matches!(err, TransformError::InvalidBase64 { ref key, .. } if key == "k1"));
    }

    #[test]
    fn test_failure_leaves_document_untouched() {
        let mut secret = doc(json!({
            "data": {"good": "b2s=", "bad": "???"},
            "stringData": {"existing": "kept"}
        }));
        let before = secret.clone();
        assert!(decode_secret_data(&mut secret).is_err());
        assert_eq!(secret, before);
    }

    #[test]
    fn test_non_mapping_string_data_is_replaced() {
        let mut secret = doc(json!({
            "data": {"k1": "dmFsdWUx"},
            "stringData": "bogus"
        }));
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret["stringData"], json!({"k1": "value1"}));
    }

    #[test]
    fn test_empty_data_mapping_still_removed() {
        let mut secret = doc(json!({"data": {}}));
        decode_secret_data(&mut secret).unwrap();
        assert!(!secret.contains_key("data"));
        assert_eq!(secret["stringData"], json!({}));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let mut secret = doc(json!({"data": {"k": "dg=="}}));
        decode_secret_data(&mut secret).unwrap();
        let once = secret.clone();
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret, once);
    }

    #[test]
    fn test_non_utf8_payload_is_lossily_decoded() {
        // 0xFF 0xFE is not valid UTF-8; base64 "//4=".
        let mut secret = doc(json!({"data": {"blob": "//4="}}));
        decode_secret_data(&mut secret).unwrap();
        assert_eq!(secret["stringData"]["blob"], "\u{FFFD}\u{FFFD}");
    }
}

//! Property-based tests for the decode-and-merge transform

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use kdec_resource::decode_secret_data;
use proptest::prelude::*;
use serde_json::{Map, Value};

proptest! {
    #[test]
    fn decode_correctness_property(payload in "\\PC*") {
        let encoded = STANDARD.encode(payload.as_bytes());
        let mut data = Map::new();
        data.insert("key".to_string(), Value::String(encoded));
        let mut doc = Map::new();
        doc.insert("data".to_string(), Value::Object(data));

        decode_secret_data(&mut doc).expect("valid base64 must decode");

        prop_assert_eq!(&doc["stringData"]["key"], &Value::String(payload));
        prop_assert!(!doc.contains_key("data"));
    }

    #[test]
    fn merge_precedence_property(
        encoded_payload in "\\PC*",
        existing_payload in "\\PC*",
    ) {
        let mut data = Map::new();
        data.insert(
            "key".to_string(),
            Value::String(STANDARD.encode(encoded_payload.as_bytes())),
        );
        let mut string_data = Map::new();
        string_data.insert("key".to_string(), Value::String(existing_payload.clone()));
        let mut doc = Map::new();
        doc.insert("data".to_string(), Value::Object(data));
        doc.insert("stringData".to_string(), Value::Object(string_data));

        decode_secret_data(&mut doc).expect("valid base64 must decode");

        // The pre-existing plaintext entry is retained unchanged.
        prop_assert_eq!(&doc["stringData"]["key"], &Value::String(existing_payload));
    }

    #[test]
    fn arbitrary_bytes_roundtrip_property(payload in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut data = Map::new();
        data.insert("blob".to_string(), Value::String(STANDARD.encode(&payload)));
        let mut doc = Map::new();
        doc.insert("data".to_string(), Value::Object(data));

        decode_secret_data(&mut doc).expect("valid base64 must decode");

        let expected = String::from_utf8_lossy(&payload).into_owned();
        prop_assert_eq!(&doc["stringData"]["blob"], &Value::String(expected));
    }
}

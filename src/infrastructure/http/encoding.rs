//! URL-encoded form encoding for outbound request bodies
//!
//! The upstream API expects bracket-style form bodies: nested maps and
//! arrays flatten into `key[sub]=value` pairs, brackets are
//! percent-encoded, booleans become 1/0, and nulls are skipped.

use serde_json::Value;

use crate::domain::fields::{scalar_form, FieldMap};

/// Encode a field map as an `application/x-www-form-urlencoded` body
pub fn form_encode(fields: &FieldMap) -> String {
    let mut pairs = Vec::new();
    for (name, value) in fields {
        append_pairs(name, value, &mut pairs);
    }
    pairs.join("&")
}

fn append_pairs(key: &str, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (sub_key, sub_value) in map {
                append_pairs(&format!("{}[{}]", key, sub_key), sub_value, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_pairs(&format!("{}[{}]", key, index), item, pairs);
            }
        }
        scalar => {
            if let Some(s) = scalar_form(scalar) {
                pairs.push(format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&s)
                ));
            }
        }
    }
}

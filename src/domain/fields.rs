//! Field map domain model - caller-supplied request parameters

use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-supplied mapping from field name to value.
///
/// Values are JSON scalars, or nested maps/arrays for array-valued fields.
/// A FieldMap is built fresh per call and consumed by the validator and
/// the executor.
pub type FieldMap = BTreeMap<String, Value>;

/// Build a FieldMap from (name, value) pairs
pub fn field_map<I, K>(pairs: I) -> FieldMap
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Canonical string form of a scalar field value.
///
/// Booleans encode as 1/0, matching the form encoding sent on the wire.
/// Returns `None` for nulls and non-scalar values.
pub fn scalar_form(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

//! Flattening of exported model fields into form parameters.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Flattens an exported field map into key-value parameters.
///
/// Nested objects use `parent[child]` keys and arrays use `parent[0]`,
/// `parent[1]`... Null values are skipped.
pub fn flatten(fields: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut parameters = BTreeMap::new();
    for (key, value) in fields {
        flatten_into(key.clone(), value, &mut parameters);
    }
    parameters
}

fn flatten_into(key: String, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            out.insert(key, b.to_string());
        }
        Value::Number(n) => {
            out.insert(key, n.to_string());
        }
        Value::String(s) => {
            out.insert(key, s.clone());
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{i}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten_into(format!("{key}[{child}]"), item, out);
            }
        }
    }
}

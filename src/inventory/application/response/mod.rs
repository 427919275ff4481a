pub mod cluster_response;
pub mod collection_response;
pub mod node_response;

use serde_json::Value;
use std::collections::HashMap;

/// `capacity` / `requested` / `allocatable` maps as sent by Rancher.
pub type QuantityMap = HashMap<String, Value>;

/// Reads one quantity verbatim. Missing keys and nulls become an empty string;
/// numbers keep their JSON spelling.
pub(crate) fn quantity(map: Option<&QuantityMap>, key: &str) -> String {
    map.and_then(|m| m.get(key))
        .map(value_to_string)
        .unwrap_or_default()
}

pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Treats `null`, absent and empty strings alike.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

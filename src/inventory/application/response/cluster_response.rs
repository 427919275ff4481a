//! Raw `/v3/clusters` items and their normalization into [`ClusterRecord`].

use super::{QuantityMap, non_empty, quantity};
use crate::core::domain::model::cluster_record::ClusterRecord;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub provider: Option<String>,
    pub driver_name: Option<String>,
    pub rancher_kubernetes_engine_config: Option<EngineConfig>,
    pub version: Option<VersionInfo>,
    pub node_count: Option<Value>,
    pub conditions: Option<Vec<Value>>,
    pub capacity: Option<QuantityMap>,
    pub requested: Option<QuantityMap>,
    pub allocatable: Option<QuantityMap>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub kubernetes_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub git_version: Option<String>,
}

impl From<ClusterResponse> for ClusterRecord {
    fn from(raw: ClusterResponse) -> Self {
        let provider = non_empty(raw.provider)
            .or(non_empty(raw.driver_name))
            .unwrap_or_else(|| "unknown".to_string());

        let k8s_version = non_empty(
            raw.rancher_kubernetes_engine_config
                .and_then(|c| c.kubernetes_version),
        )
        .or(non_empty(raw.version.and_then(|v| v.git_version)))
        .unwrap_or_else(|| "N/A".to_string());

        let node_count = raw.node_count.and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        });

        let capacity = raw.capacity.as_ref();
        let requested = raw.requested.as_ref();
        let allocatable = raw.allocatable.as_ref();

        ClusterRecord {
            id: raw.id.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            state: raw.state.unwrap_or_else(|| "unknown".to_string()),
            provider,
            k8s_version,
            node_count,
            conditions: raw.conditions.unwrap_or_default(),
            cpu_capacity: quantity(capacity, "cpu"),
            cpu_requested: quantity(requested, "cpu"),
            memory_capacity: quantity(capacity, "memory"),
            memory_requested: quantity(requested, "memory"),
            allocatable_cpu: quantity(allocatable, "cpu"),
            allocatable_memory: quantity(allocatable, "memory"),
        }
    }
}

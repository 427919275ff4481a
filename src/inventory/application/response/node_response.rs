//! Raw `/v3/nodes` items and their normalization into [`NodeRecord`].

use super::{QuantityMap, non_empty, quantity, value_to_string};
use crate::core::domain::model::node_record::{NodeRecord, NodeRole};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResponse {
    pub node_name: Option<String>,
    pub requested_hostname: Option<String>,
    pub state: Option<String>,
    pub control_plane: Option<bool>,
    pub etcd: Option<bool>,
    pub worker: Option<bool>,
    pub info: Option<NodeInfo>,
    pub conditions: Option<Vec<Value>>,
    pub capacity: Option<QuantityMap>,
    pub requested: Option<QuantityMap>,
    pub allocatable: Option<QuantityMap>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeInfo {
    pub os: Option<OsInfo>,
    pub cpu: Option<CpuInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub operating_system: Option<String>,
    pub kernel_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CpuInfo {
    pub count: Option<Value>,
}

impl From<NodeResponse> for NodeRecord {
    fn from(raw: NodeResponse) -> Self {
        let name = non_empty(raw.node_name)
            .or(non_empty(raw.requested_hostname))
            .unwrap_or_else(|| "unknown".to_string());
        let state = raw.state.unwrap_or_else(|| "unknown".to_string());

        let (os, cpu) = match raw.info {
            Some(info) => (info.os.unwrap_or_default(), info.cpu.unwrap_or_default()),
            None => (OsInfo::default(), CpuInfo::default()),
        };

        let capacity = raw.capacity.as_ref();
        let requested = raw.requested.as_ref();
        let allocatable = raw.allocatable.as_ref();

        let cpu_capacity = quantity(capacity, "cpu");
        let cpu_count = cpu
            .count
            .filter(|v| !v.is_null())
            .map(|v| value_to_string(&v))
            .or_else(|| Some(cpu_capacity.clone()).filter(|c| !c.is_empty()))
            .unwrap_or_else(|| "N/A".to_string());

        NodeRecord {
            is_down: NodeRecord::is_down_state(&state),
            name,
            state,
            roles: NodeRole::from_flags(
                raw.control_plane.unwrap_or(false),
                raw.etcd.unwrap_or(false),
                raw.worker.unwrap_or(false),
            ),
            os_image: os.operating_system.unwrap_or_else(|| "N/A".to_string()),
            kernel: os.kernel_version.unwrap_or_else(|| "N/A".to_string()),
            cpu_count,
            cpu_capacity,
            cpu_requested: quantity(requested, "cpu"),
            memory_capacity: quantity(capacity, "memory"),
            memory_requested: quantity(requested, "memory"),
            allocatable_cpu: quantity(allocatable, "cpu"),
            allocatable_memory: quantity(allocatable, "memory"),
            conditions: raw.conditions.unwrap_or_default(),
        }
    }
}

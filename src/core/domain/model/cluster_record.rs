//! Domain model for a cluster from the `/v3/clusters` endpoint.

use crate::core::domain::model::resource_usage::{ResourceKind, ResourceUsage};
use crate::core::domain::model::state_health::StateHealth;
use serde::{Deserialize, Serialize};

/// Identity and health snapshot of one Rancher cluster.
///
/// Resource quantities are kept exactly as the upstream formats them
/// (`"4"`, `"3500m"`, `"16Gi"`); use [`ClusterRecord::cpu_usage`] and
/// [`ClusterRecord::memory_usage`] for parsed ratios.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterRecord {
    /// Opaque, unique cluster id (e.g. `c-m-abcd1234`).
    pub id: String,
    /// Display name. Not guaranteed unique.
    pub name: String,
    /// Lifecycle state (`active`, `provisioning`, `error`, `unknown`, ...).
    pub state: String,
    /// Provider, falling back to the driver name.
    pub provider: String,
    /// Kubernetes version, or `N/A`.
    pub k8s_version: String,
    /// Node count as reported on the cluster object, when present.
    #[serde(default)]
    pub node_count: Option<u64>,
    /// Upstream conditions, untouched.
    #[serde(default)]
    pub conditions: Vec<serde_json::Value>,
    pub cpu_capacity: String,
    pub cpu_requested: String,
    pub memory_capacity: String,
    pub memory_requested: String,
    pub allocatable_cpu: String,
    pub allocatable_memory: String,
}

impl ClusterRecord {
    /// Case-insensitive substring match against the cluster name.
    pub fn name_matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }

    /// Only the exact state `active` counts; `running` does not.
    pub fn is_active(&self) -> bool {
        self.state.eq_ignore_ascii_case("active")
    }

    pub fn health(&self) -> StateHealth {
        StateHealth::of(&self.state)
    }

    pub fn cpu_usage(&self) -> Option<ResourceUsage> {
        ResourceUsage::from_quantities(&self.cpu_requested, &self.cpu_capacity, ResourceKind::Cpu)
    }

    pub fn memory_usage(&self) -> Option<ResourceUsage> {
        ResourceUsage::from_quantities(
            &self.memory_requested,
            &self.memory_capacity,
            ResourceKind::Memory,
        )
    }
}

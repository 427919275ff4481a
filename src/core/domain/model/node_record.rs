//! Domain model for a node from the `/v3/nodes?clusterId=` endpoint.

use crate::core::domain::model::resource_usage::{ResourceKind, ResourceUsage};
use crate::core::domain::model::state_health::StateHealth;
use serde::{Deserialize, Serialize};

/// Role a node plays in its cluster. A node may hold any number of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeRole {
    ControlPlane,
    Etcd,
    Worker,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::ControlPlane => "control-plane",
            NodeRole::Etcd => "etcd",
            NodeRole::Worker => "worker",
        }
    }

    /// Collects roles from the three upstream flags, in a fixed order.
    pub fn from_flags(control_plane: bool, etcd: bool, worker: bool) -> Vec<NodeRole> {
        [
            (control_plane, NodeRole::ControlPlane),
            (etcd, NodeRole::Etcd),
            (worker, NodeRole::Worker),
        ]
        .into_iter()
        .filter_map(|(set, role)| set.then_some(role))
        .collect()
    }
}

/// One control-plane or worker node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeRecord {
    /// `nodeName`, else `requestedHostname`, else `unknown`.
    pub name: String,
    pub state: String,
    pub roles: Vec<NodeRole>,
    /// Operating system, or `N/A`.
    pub os_image: String,
    /// Kernel version, or `N/A`.
    pub kernel: String,
    /// Reported CPU count, else the CPU capacity, else `N/A`.
    pub cpu_count: String,
    pub cpu_capacity: String,
    pub cpu_requested: String,
    pub memory_capacity: String,
    pub memory_requested: String,
    pub allocatable_cpu: String,
    pub allocatable_memory: String,
    #[serde(default)]
    pub conditions: Vec<serde_json::Value>,
    /// Derived from `state`, see [`NodeRecord::is_down_state`].
    pub is_down: bool,
}

impl NodeRecord {
    /// A node is up only when its state is `active` or `running`
    /// (case-insensitive). Everything else, including an empty state, is down.
    pub fn is_down_state(state: &str) -> bool {
        let state = state.to_lowercase();
        !(state == "active" || state == "running")
    }

    /// Case-insensitive substring match against the node name.
    pub fn name_matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
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

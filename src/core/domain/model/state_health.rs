use serde::Serialize;

/// Three-way reading of an upstream state string, used for display badges.
///
/// Node down detection does not go through this; see
/// [`NodeRecord::is_down_state`](crate::core::domain::model::node_record::NodeRecord::is_down_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateHealth {
    Healthy,
    Transitioning,
    Failing,
}

impl StateHealth {
    pub fn of(state: &str) -> Self {
        match state.to_lowercase().as_str() {
            "active" | "running" => StateHealth::Healthy,
            "provisioning" | "updating" | "upgrading" | "migrating" => StateHealth::Transitioning,
            _ => StateHealth::Failing,
        }
    }
}

//! A cluster joined with its nodes, plus the derived down-node signals.

use crate::core::domain::model::{cluster_record::ClusterRecord, node_record::NodeRecord};
use serde::Serialize;

/// A [`ClusterRecord`] with its nodes in upstream order.
///
/// `total_nodes`, `down_nodes` and `down_node_names` are always derived from
/// `nodes` at construction, so they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    #[serde(flatten)]
    cluster: ClusterRecord,
    nodes: Vec<NodeRecord>,
    total_nodes: usize,
    down_nodes: usize,
    down_node_names: Vec<String>,
}

impl ClusterSummary {
    pub fn new(cluster: ClusterRecord, nodes: Vec<NodeRecord>) -> Self {
        let down_node_names: Vec<String> = nodes
            .iter()
            .filter(|n| n.is_down)
            .map(|n| n.name.clone())
            .collect();
        Self {
            cluster,
            total_nodes: nodes.len(),
            down_nodes: down_node_names.len(),
            down_node_names,
            nodes,
        }
    }

    /// Keeps only the nodes whose name contains `keyword` (case-insensitive).
    /// Returns `None` when no node is left.
    pub fn retain_nodes_named(self, keyword: &str) -> Option<Self> {
        let nodes: Vec<NodeRecord> = self
            .nodes
            .into_iter()
            .filter(|n| n.name_matches(keyword))
            .collect();
        if nodes.is_empty() {
            None
        } else {
            Some(Self::new(self.cluster, nodes))
        }
    }

    pub fn cluster(&self) -> &ClusterRecord {
        &self.cluster
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    pub fn down_nodes(&self) -> usize {
        self.down_nodes
    }

    pub fn down_node_names(&self) -> &[String] {
        &self.down_node_names
    }

    pub fn has_down_nodes(&self) -> bool {
        self.down_nodes > 0
    }
}

//! Joins clusters with their nodes and derives per-cluster and fleet-wide signals.

use crate::{
    core::domain::{
        error::RancherResult,
        model::{
            cluster_record::ClusterRecord, cluster_summary::ClusterSummary,
            node_record::NodeRecord, statistics::Statistics,
        },
    },
    inventory::application::service::inventory_service::Inventory,
};
use futures::{StreamExt, stream};
use std::future::Future;
use tracing::warn;

/// Which clusters a summary request covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterSelector {
    All,
    /// Exact id match.
    Id(String),
    /// Case-insensitive substring match on the name.
    Name(String),
}

impl ClusterSelector {
    /// The name wins over the id; empty strings count as absent.
    pub fn from_options(cluster_id: Option<&str>, cluster_name: Option<&str>) -> Self {
        match (
            cluster_id.filter(|s| !s.is_empty()),
            cluster_name.filter(|s| !s.is_empty()),
        ) {
            (_, Some(name)) => ClusterSelector::Name(name.to_string()),
            (Some(id), None) => ClusterSelector::Id(id.to_string()),
            (None, None) => ClusterSelector::All,
        }
    }
}

/// Builds one summary per cluster, fetching node lists with at most
/// `concurrency` requests in flight.
///
/// A failed node fetch leaves that cluster with no nodes; it never aborts the
/// batch. A slow fetch only holds its own slot, and output order equals input
/// order.
pub async fn summarize<F, Fut>(
    clusters: Vec<ClusterRecord>,
    fetch_nodes: F,
    concurrency: usize,
) -> Vec<ClusterSummary>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = RancherResult<Vec<NodeRecord>>>,
{
    let mut summaries: Vec<(usize, ClusterSummary)> = stream::iter(clusters.into_iter().enumerate())
        .map(|(index, cluster)| {
            let nodes = fetch_nodes(cluster.id.clone());
            async move {
                let nodes = nodes.await.unwrap_or_else(|e| {
                    warn!(cluster_id = %cluster.id, error = %e, "node fetch failed, reporting no nodes");
                    Vec::new()
                });
                (index, ClusterSummary::new(cluster, nodes))
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    summaries.sort_unstable_by_key(|(index, _)| *index);
    summaries.into_iter().map(|(_, summary)| summary).collect()
}

/// Result aggregation over an [`Inventory`].
#[derive(Debug, Clone)]
pub struct Aggregator<I> {
    inventory: I,
    concurrency: usize,
}

impl<I: Inventory> Aggregator<I> {
    pub fn new(inventory: I, concurrency: usize) -> Self {
        Self {
            inventory,
            concurrency: concurrency.max(1),
        }
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    /// Summaries for `clusters`, nodes fetched from the inventory.
    pub async fn summarize(&self, clusters: Vec<ClusterRecord>) -> Vec<ClusterSummary> {
        summarize(
            clusters,
            |cluster_id| async move { self.inventory.list_nodes(&cluster_id).await },
            self.concurrency,
        )
        .await
    }

    /// Clusters whose name contains `keyword`, case-insensitively, in upstream order.
    pub async fn find_clusters_by_name(&self, keyword: &str) -> RancherResult<Vec<ClusterRecord>> {
        let clusters = self.inventory.list_clusters().await?;
        Ok(clusters
            .into_iter()
            .filter(|c| c.name_matches(keyword))
            .collect())
    }

    /// Summaries for the selected clusters.
    ///
    /// # Errors
    /// Fails only when the cluster listing itself fails.
    pub async fn get_summary(&self, selector: &ClusterSelector) -> RancherResult<Vec<ClusterSummary>> {
        let clusters = match selector {
            ClusterSelector::All => self.inventory.list_clusters().await?,
            ClusterSelector::Name(name) => self.find_clusters_by_name(name).await?,
            ClusterSelector::Id(id) => self
                .inventory
                .list_clusters()
                .await?
                .into_iter()
                .filter(|c| &c.id == id)
                .collect(),
        };
        Ok(self.summarize(clusters).await)
    }

    /// Fleet-wide counts. Never fails: a failed cluster listing yields zeroed
    /// statistics with an error description, and a failed node listing counts
    /// as zero nodes for that cluster.
    pub async fn statistics(&self) -> Statistics {
        let clusters = match self.inventory.list_clusters().await {
            Ok(clusters) => clusters,
            Err(e) => {
                warn!(error = %e, "cluster listing failed, statistics unavailable");
                return Statistics::failed(e);
            }
        };

        let active_clusters = clusters.iter().filter(|c| c.is_active()).count();
        let node_counts: Vec<usize> = stream::iter(clusters.iter())
            .map(|cluster| async move {
                match self.inventory.list_nodes(&cluster.id).await {
                    Ok(nodes) => nodes.len(),
                    Err(e) => {
                        warn!(cluster_id = %cluster.id, error = %e, "node fetch failed, counting zero nodes");
                        0
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        Statistics {
            total_clusters: clusters.len(),
            active_clusters,
            total_nodes: node_counts.into_iter().sum(),
            error: None,
        }
    }
}

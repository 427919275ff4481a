//! Dispatches a classified query to the aggregator.

use crate::{
    chat::application::service::query_classifier::QueryIntent,
    core::domain::{error::RancherResult, model::cluster_summary::ClusterSummary},
    inventory::application::service::{
        aggregator::{Aggregator, ClusterSelector},
        inventory_service::Inventory,
    },
};
use tracing::debug;

pub struct QueryExecutor<'a, I> {
    aggregator: &'a Aggregator<I>,
}

impl<'a, I: Inventory> QueryExecutor<'a, I> {
    pub fn new(aggregator: &'a Aggregator<I>) -> Self {
        Self { aggregator }
    }

    /// Runs one query against a fresh fetch.
    ///
    /// | intent | lookup |
    /// |---|---|
    /// | `ListClusters` | every cluster |
    /// | `ClusterDetail`, `SearchCluster` | clusters named like `keyword`, or every cluster when it is empty |
    /// | `NodeDetail` | every cluster, narrowed to nodes named like `keyword`; clusters left without nodes are dropped |
    pub async fn execute(
        &self,
        intent: QueryIntent,
        keyword: &str,
    ) -> RancherResult<Vec<ClusterSummary>> {
        debug!(intent = intent.as_str(), keyword, "executing query");
        match intent {
            QueryIntent::ListClusters => self.aggregator.get_summary(&ClusterSelector::All).await,
            QueryIntent::ClusterDetail | QueryIntent::SearchCluster => {
                let selector = ClusterSelector::from_options(None, Some(keyword));
                self.aggregator.get_summary(&selector).await
            }
            QueryIntent::NodeDetail => {
                let summaries = self.aggregator.get_summary(&ClusterSelector::All).await?;
                Ok(summaries
                    .into_iter()
                    .filter_map(|s| s.retain_nodes_named(keyword))
                    .collect())
            }
        }
    }
}

//! Remote inventory: authenticated reads of clusters and nodes.

use crate::{
    core::{
        domain::{
            error::RancherResult,
            model::{cluster_record::ClusterRecord, node_record::NodeRecord},
        },
        infrastructure::api_client::ApiClient,
    },
    inventory::application::response::{
        cluster_response::ClusterResponse, collection_response::CollectionResponse,
        node_response::NodeResponse,
    },
};
use async_trait::async_trait;
use tracing::debug;

pub const CLUSTERS_PATH: &str = "/v3/clusters";
pub const NODES_PATH: &str = "/v3/nodes";

/// Source of normalized cluster and node records.
///
/// Every call is a fresh read; implementations keep no cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Every cluster the upstream reports, in upstream order.
    async fn list_clusters(&self) -> RancherResult<Vec<ClusterRecord>>;

    /// Nodes belonging to one cluster, in upstream order.
    async fn list_nodes(&self, cluster_id: &str) -> RancherResult<Vec<NodeRecord>>;
}

/// [`Inventory`] backed by the Rancher v3 REST API.
#[derive(Debug, Clone)]
pub struct InventoryService {
    api_client: ApiClient,
}

impl InventoryService {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }
}

#[async_trait]
impl Inventory for InventoryService {
    async fn list_clusters(&self) -> RancherResult<Vec<ClusterRecord>> {
        let response: CollectionResponse<ClusterResponse> =
            self.api_client.get(CLUSTERS_PATH, &[]).await?;
        debug!(count = response.data.len(), "listed clusters");
        Ok(response.data.into_iter().map(ClusterRecord::from).collect())
    }

    async fn list_nodes(&self, cluster_id: &str) -> RancherResult<Vec<NodeRecord>> {
        let response: CollectionResponse<NodeResponse> = self
            .api_client
            .get(NODES_PATH, &[("clusterId", cluster_id)])
            .await?;
        debug!(cluster_id, count = response.data.len(), "listed nodes");
        Ok(response.data.into_iter().map(NodeRecord::from).collect())
    }
}

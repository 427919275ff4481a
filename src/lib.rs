pub mod chat;
pub mod config;
pub mod core;
pub mod inventory;

#[cfg(test)]
mod tests;

pub use crate::chat::application::{
    response::chat_response::ChatResponse,
    service::query_classifier::{ParsedQuery, QueryIntent},
};
pub use crate::config::{ClientConfig, RancherEnv, RateLimitConfig};
pub use crate::core::domain::error::{RancherError, RancherResult, ValidationError};
pub use crate::core::domain::model::{
    cluster_record::ClusterRecord,
    cluster_summary::ClusterSummary,
    node_record::{NodeRecord, NodeRole},
    rancher_connection::RancherConnection,
    resource_usage::{ResourceUsage, UsageLevel},
    state_health::StateHealth,
    statistics::Statistics,
};
pub use crate::core::domain::value_object::{RancherToken, RancherUrl};
pub use crate::inventory::application::service::{
    aggregator::{Aggregator, ClusterSelector},
    inventory_service::{Inventory, InventoryService},
};

use crate::{
    chat::application::service::{query_classifier, query_executor::QueryExecutor},
    core::infrastructure::api_client::ApiClient,
};
use std::time::Duration;
use tracing::info;

/// A client that answers operator questions about Rancher-managed clusters.
///
/// It provides:
/// - Classification of free-text questions into intents
/// - Cluster and node lookups against the Rancher v3 API
/// - Per-cluster summaries with down-node detection
/// - Fleet-wide statistics
///
/// # Examples
///
/// ```no_run
/// use rancher_assist::{RancherClient, RancherResult};
///
/// #[tokio::main]
/// async fn main() -> RancherResult<()> {
///     let client = RancherClient::builder()
///         .base_url("https://rancher.example.com")
///         .token("token-abcde:secret")
///         .verify_tls(false)
///         .build()?;
///
///     let reply = client.ask("show nodes for cluster prod-east").await?;
///     println!("{}", reply.message);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RancherClient {
    aggregator: Aggregator<InventoryService>,
}

/// Builder for RancherClient configuration
#[derive(Debug)]
pub struct RancherClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    verify_tls: bool,
    config: ClientConfig,
}

impl Default for RancherClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            verify_tls: true,
            config: ClientConfig::default(),
        }
    }
}

impl RancherClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Verify the server certificate (default `true`).
    pub fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Maximum number of node listings fetched at the same time.
    pub fn node_concurrency(mut self, workers: usize) -> Self {
        self.config.node_concurrency = workers;
        self
    }

    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(rate_limit);
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the settings and builds the client. No request is sent.
    ///
    /// # Errors
    /// Returns `RancherError::Validation` when the base URL or token is
    /// missing or malformed, or the tuning values are out of range.
    pub fn build(self) -> RancherResult<RancherClient> {
        let base_url = RancherUrl::new(self.base_url.ok_or_else(|| ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL is required".to_string(),
        })?)?;

        let token = RancherToken::new(self.token.ok_or_else(|| ValidationError::Field {
            field: "token".to_string(),
            message: "API token is required".to_string(),
        })?)?;

        let connection = RancherConnection::new(base_url, token, self.verify_tls);
        let api_client = ApiClient::new(connection, &self.config)?;
        let aggregator = Aggregator::new(
            InventoryService::new(api_client),
            self.config.effective_concurrency(),
        );

        Ok(RancherClient { aggregator })
    }
}

impl RancherClient {
    /// Creates a new builder for RancherClient configuration
    pub fn builder() -> RancherClientBuilder {
        RancherClientBuilder::default()
    }

    /// Builds a client from `RANCHER_*` environment variables.
    pub fn from_env() -> RancherResult<Self> {
        let settings = RancherEnv::load()?;
        info!(base_url = %settings.base_url, verify_tls = settings.verify_ssl, "configuring Rancher client");
        Self::builder()
            .base_url(settings.base_url.clone())
            .token(settings.api_token.clone())
            .verify_tls(settings.verify_ssl)
            .config(settings.client_config())
            .build()
    }

    /// Returns the connection details in use.
    pub fn connection(&self) -> &RancherConnection {
        self.aggregator.inventory().api_client().connection()
    }

    /// Maps a free-text question to an intent and keyword.
    pub fn classify(text: &str) -> ParsedQuery {
        query_classifier::classify(text)
    }

    /// Fetches the summaries an intent asks for.
    ///
    /// # Errors
    /// Fails when the cluster listing fails. Node listing failures only
    /// empty the affected cluster's node list.
    pub async fn execute(
        &self,
        intent: QueryIntent,
        keyword: &str,
    ) -> RancherResult<Vec<ClusterSummary>> {
        QueryExecutor::new(&self.aggregator)
            .execute(intent, keyword)
            .await
    }

    /// Builds the reply for a result set.
    pub fn format(results: Vec<ClusterSummary>, intent: QueryIntent, keyword: &str) -> ChatResponse {
        ChatResponse::format(results, intent, keyword)
    }

    /// Classifies, executes and formats a question in one call.
    pub async fn ask(&self, text: &str) -> RancherResult<ChatResponse> {
        let parsed = Self::classify(text);
        let results = self.execute(parsed.intent, &parsed.keyword).await?;
        Ok(Self::format(results, parsed.intent, &parsed.keyword))
    }

    /// Fleet-wide counts. Never fails; see [`Statistics::error`].
    pub async fn statistics(&self) -> Statistics {
        self.aggregator.statistics().await
    }

    pub async fn list_clusters(&self) -> RancherResult<Vec<ClusterRecord>> {
        self.aggregator.inventory().list_clusters().await
    }

    pub async fn list_nodes(&self, cluster_id: &str) -> RancherResult<Vec<NodeRecord>> {
        self.aggregator.inventory().list_nodes(cluster_id).await
    }

    pub async fn find_clusters_by_name(&self, keyword: &str) -> RancherResult<Vec<ClusterRecord>> {
        self.aggregator.find_clusters_by_name(keyword).await
    }

    /// Summaries selected by name (preferred) or exact id; every cluster when
    /// neither is given.
    pub async fn cluster_summary(
        &self,
        cluster_id: Option<&str>,
        cluster_name: Option<&str>,
    ) -> RancherResult<Vec<ClusterSummary>> {
        let selector = ClusterSelector::from_options(cluster_id, cluster_name);
        self.aggregator.get_summary(&selector).await
    }
}

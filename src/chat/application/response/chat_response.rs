//! Turns results into the message shown to the operator.

use crate::{
    chat::application::service::query_classifier::QueryIntent,
    core::domain::model::cluster_summary::ClusterSummary,
};
use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str =
    "I couldn't find any matching clusters or nodes. Try asking to **list all clusters**.";

/// Reply to one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub results: Vec<ClusterSummary>,
    pub count: usize,
}

impl ChatResponse {
    /// Builds the reply. Empty results always read as "not found", whatever
    /// the intent.
    pub fn format(results: Vec<ClusterSummary>, intent: QueryIntent, keyword: &str) -> Self {
        if results.is_empty() {
            return Self {
                message: NOT_FOUND_MESSAGE.to_string(),
                results,
                count: 0,
            };
        }

        let count = results.len();
        let mut message = match intent {
            QueryIntent::ListClusters => format!("Found **{}** cluster(s).", count),
            _ if keyword.is_empty() => format!("Found **{}** cluster(s).", count),
            QueryIntent::ClusterDetail => {
                format!("Found **{}** cluster(s) matching '**{}**'.", count, keyword)
            }
            QueryIntent::NodeDetail => format!(
                "Found nodes matching '**{}**' in **{}** cluster(s).",
                keyword, count
            ),
            QueryIntent::SearchCluster => {
                format!("Found **{}** result(s) for '**{}**'.", count, keyword)
            }
        };

        let down: usize = results.iter().map(ClusterSummary::down_nodes).sum();
        if down > 0 {
            let affected = results.iter().filter(|s| s.has_down_nodes()).count();
            message.push_str(&format!(
                " **{}** node(s) down across {} cluster(s).",
                down, affected
            ));
        }

        Self {
            message,
            results,
            count,
        }
    }
}

//! Maps a free-text question to an intent and a keyword.
//!
//! Rules are tried in order on the trimmed, lower-cased text and the first one
//! that matches decides. A question mentioning both "cluster" and "node" is
//! therefore a cluster question.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// What the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    ListClusters,
    ClusterDetail,
    NodeDetail,
    SearchCluster,
}

impl QueryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::ListClusters => "list_clusters",
            QueryIntent::ClusterDetail => "cluster_detail",
            QueryIntent::NodeDetail => "node_detail",
            QueryIntent::SearchCluster => "search_cluster",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedQuery {
    pub intent: QueryIntent,
    pub keyword: String,
}

impl ParsedQuery {
    pub fn new(intent: QueryIntent, keyword: impl Into<String>) -> Self {
        Self {
            intent,
            keyword: keyword.into(),
        }
    }

    fn list_all() -> Self {
        Self::new(QueryIntent::ListClusters, "")
    }
}

/// One classification step: when `matches` accepts the normalized text,
/// `build` produces the result.
pub struct ClassificationRule {
    pub name: &'static str,
    matches: fn(&str) -> bool,
    build: fn(&str) -> ParsedQuery,
}

impl ClassificationRule {
    pub fn apply(&self, normalized: &str) -> Option<ParsedQuery> {
        (self.matches)(normalized).then(|| (self.build)(normalized))
    }
}

/// The ordered rule list. Anything no rule accepts becomes a `SearchCluster`.
pub static RULES: [ClassificationRule; 4] = [
    ClassificationRule {
        name: "list_clusters",
        matches: is_cluster_listing,
        build: |_| ParsedQuery::list_all(),
    },
    ClassificationRule {
        name: "cluster_detail",
        matches: |q| CLUSTER_DETAIL_RE.is_match(q),
        build: build_cluster_detail,
    },
    ClassificationRule {
        name: "node",
        matches: |q| NODE_RE.is_match(q),
        build: build_node,
    },
    ClassificationRule {
        name: "resource",
        matches: |q| RESOURCE_RE.is_match(q),
        build: build_resource,
    },
];

static LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:list|show|get|all)\b.*(?:\bclusters\b|\bcluster\s*$)").expect("valid regex")
});

static CLUSTER_DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\bcluster|\bshow me|\bdetails? of|\bstatus of)\s+(?:cluster\s+)?([a-z0-9_.\-]+)")
        .expect("valid regex")
});

static NODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnodes?\b").expect("valid regex"));

static NODE_DETAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnode\s+([a-z0-9_.\-]+)").expect("valid regex"));

static RESOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:cpu|memory|mem|resources?|utilization|usage)\b").expect("valid regex")
});

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.\-]{3,}$").expect("valid regex"));

/// Words skipped when looking for the target of a resource question.
const RESOURCE_FILLER: &[&str] = &[
    "cpu",
    "memory",
    "mem",
    "resource",
    "resources",
    "utilization",
    "usage",
    "of",
    "for",
    "on",
    "in",
    "at",
    "the",
    "cluster",
];

fn is_cluster_listing(q: &str) -> bool {
    q == "clusters" || q == "all clusters" || LIST_RE.is_match(q)
}

fn build_cluster_detail(q: &str) -> ParsedQuery {
    match CLUSTER_DETAIL_RE.captures(q).and_then(|c| c.get(1)) {
        Some(m) => ParsedQuery::new(QueryIntent::ClusterDetail, m.as_str()),
        None => ParsedQuery::list_all(),
    }
}

fn build_node(q: &str) -> ParsedQuery {
    match NODE_DETAIL_RE.captures(q).and_then(|c| c.get(1)) {
        Some(m) => ParsedQuery::new(QueryIntent::NodeDetail, m.as_str()),
        None => ParsedQuery::list_all(),
    }
}

fn build_resource(q: &str) -> ParsedQuery {
    let Some(mention) = RESOURCE_RE.find(q) else {
        return ParsedQuery::list_all();
    };
    let target = q[mention.end()..]
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-')))
        .find(|token| !token.is_empty() && !RESOURCE_FILLER.contains(token));

    match target {
        Some(token) if IDENTIFIER_RE.is_match(token) => {
            ParsedQuery::new(QueryIntent::ClusterDetail, token)
        }
        _ => ParsedQuery::list_all(),
    }
}

/// Classifies an utterance. Never fails: unmatched text falls back to a
/// `SearchCluster` over the original (trimmed, case-preserved) text.
pub fn classify(text: &str) -> ParsedQuery {
    let normalized = text.trim().to_lowercase();
    for rule in RULES.iter() {
        if let Some(parsed) = rule.apply(&normalized) {
            debug!(rule = rule.name, intent = parsed.intent.as_str(), keyword = %parsed.keyword, "classified");
            return parsed;
        }
    }
    debug!(intent = "search_cluster", "no rule matched");
    ParsedQuery::new(QueryIntent::SearchCluster, text.trim())
}

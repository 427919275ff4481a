//! Client tuning and environment-driven configuration.

use crate::core::domain::error::ValidationError;
use envconfig::Envconfig;
use std::fmt;
use std::time::Duration;

/// Fixed timeout applied to every upstream call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of node listings fetched in parallel.
pub const DEFAULT_NODE_CONCURRENCY: usize = 8;

/// Client-side rate limit for upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Tuning knobs for the HTTP transport and the aggregation fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Upper bound on concurrent node listings. Values below 1 are treated as 1.
    pub node_concurrency: usize,
    /// Disabled when `None`.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            node_concurrency: DEFAULT_NODE_CONCURRENCY,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Rate limit values are checked when the limiter is built.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout.is_zero() {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn effective_concurrency(&self) -> usize {
        self.node_concurrency.max(1)
    }
}

/// Settings read from the process environment.
#[derive(Envconfig, Clone)]
pub struct RancherEnv {
    #[envconfig(from = "RANCHER_BASE_URL")]
    pub base_url: String,

    #[envconfig(from = "RANCHER_API_TOKEN")]
    pub api_token: String,

    #[envconfig(from = "RANCHER_VERIFY_SSL", default = "true")]
    pub verify_ssl: bool,

    #[envconfig(from = "RANCHER_TIMEOUT_SECS", default = "15")]
    pub timeout_secs: u64,

    #[envconfig(from = "RANCHER_NODE_CONCURRENCY", default = "8")]
    pub node_concurrency: usize,
}

impl fmt::Debug for RancherEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RancherEnv")
            .field("base_url", &self.base_url)
            .field("api_token", &"***")
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout_secs", &self.timeout_secs)
            .field("node_concurrency", &self.node_concurrency)
            .finish()
    }
}

impl RancherEnv {
    /// Reads the settings, reporting a missing or malformed variable as a validation error.
    pub fn load() -> Result<Self, ValidationError> {
        Self::init_from_env().map_err(|e| ValidationError::Field {
            field: "environment".to_string(),
            message: e.to_string(),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            node_concurrency: self.node_concurrency,
            rate_limit: None,
        }
    }
}

//! Internal HTTP client that signs every request with the Rancher bearer token.

use crate::{
    config::ClientConfig,
    core::domain::{
        error::{RancherError, RancherResult, ValidationError},
        model::rancher_connection::RancherConnection,
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Internal HTTP client for the Rancher v3 API.
///
/// Every request carries `Authorization: Bearer <token>` and is bounded by the
/// configured timeout. Failures are reported once; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<RancherConnection>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `RancherError::Validation` for an invalid rate limit and
    /// `RancherError::Unexpected` if the HTTP client cannot be built.
    pub fn new(connection: RancherConnection, config: &ClientConfig) -> RancherResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if connection.accepts_invalid_certs() {
            debug!(
                base_url = connection.base_url().as_str(),
                "TLS certificate verification disabled"
            );
        }

        let http_client = Client::builder()
            .default_headers(default_headers)
            .danger_accept_invalid_certs(connection.accepts_invalid_certs())
            .timeout(config.timeout)
            .build()
            .map_err(|e| RancherError::Unexpected(format!("Failed to build HTTP client: {}", e)))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = non_zero(rl.requests_per_second, "requests_per_second")?;
                let burst = non_zero(rl.burst_size, "burst_size")?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &RancherConnection {
        &self.connection
    }

    /// Performs an authenticated GET request and decodes the JSON body.
    ///
    /// # Errors
    /// * `Connection` when the host cannot be reached
    /// * `UpstreamHttp` for any non-2xx status
    /// * `Unexpected` for timeouts, other transport faults and undecodable bodies
    pub async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> RancherResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut url = self.connection.base_url().endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        debug!(%url, "GET");
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, self.connection.token().as_bearer_header())
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(RancherError::UpstreamHttp {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RancherError::Unexpected(format!("Failed to parse response: {}", e)))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> RancherError {
        if error.is_connect() {
            RancherError::Connection {
                url: self.connection.base_url().as_str().to_string(),
                message: error.to_string(),
            }
        } else if error.is_timeout() {
            RancherError::Unexpected(format!("Request timed out: {}", error))
        } else {
            RancherError::Unexpected(format!("HTTP request failed: {}", error))
        }
    }
}

fn non_zero(value: u32, field: &str) -> Result<NonZeroU32, ValidationError> {
    NonZeroU32::new(value).ok_or_else(|| ValidationError::Field {
        field: field.to_string(),
        message: "must be greater than zero".to_string(),
    })
}

use crate::core::domain::error::ValidationError;
use url::Url;

const MAX_URL_LENGTH: usize = 2083;

/// A validated Rancher server base URL (scheme, host and optional port).
///
/// Any trailing slash is dropped so that API paths can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RancherUrl {
    value: Url,
}

impl RancherUrl {
    /// Validates and wraps a base URL such as `https://rancher.example.com`.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        validate_url(value)?;
        let parsed = Url::parse(value.trim_end_matches('/'))
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self { value: parsed })
    }

    /// Returns the base URL as a string slice, without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.value.as_str().trim_end_matches('/')
    }

    /// Builds the full URL of an API path, e.g. `/v3/clusters`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ValidationError> {
        let full = format!("{}/{}", self.as_str(), path.trim_start_matches('/'));
        Url::parse(&full).map_err(|e| ValidationError::Format(format!("Invalid API path: {}", e)))
    }
}

/// Validates that a string is an absolute http(s) URL with a host.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL must contain a host".to_string(),
        });
    }
    Ok(())
}

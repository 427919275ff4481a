use thiserror::Error;

/// The main error type for Rancher inventory operations.
///
/// Every upstream call fails with exactly one of the transport variants;
/// none of them is retried automatically.
#[derive(Error, Debug)]
pub enum RancherError {
    /// The upstream host could not be reached
    ///
    /// # Fields
    /// * `url` - The base URL that was being contacted
    /// * `message` - What the transport reported
    #[error("Cannot connect to Rancher at {url}: {message}")]
    Connection { url: String, message: String },

    /// The upstream answered with a non-2xx status
    ///
    /// # Fields
    /// * `status` - The HTTP status code returned
    /// * `message` - The response body, or a placeholder when it was unreadable
    #[error("Rancher API error (HTTP {status}): {message}")]
    UpstreamHttp { status: u16, message: String },

    /// Any other transport or decoding fault
    #[error("Unexpected error calling Rancher API: {0}")]
    Unexpected(String),

    /// Client configuration was rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl RancherError {
    /// True when the upstream was unreachable. Front ends map this to 503.
    pub fn is_connection(&self) -> bool {
        matches!(self, RancherError::Connection { .. })
    }

    /// The upstream status code, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RancherError::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Specialized error type for configuration and value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),
}

/// Type alias for Results that may fail with a RancherError
pub type RancherResult<T> = Result<T, RancherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_is_flagged() {
        let err = RancherError::Connection {
            url: "https://rancher.local".to_string(),
            message: "refused".to_string(),
        };
        assert!(err.is_connection());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("https://rancher.local"));
    }

    #[test]
    fn test_upstream_error_carries_status() {
        let err = RancherError::UpstreamHttp {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert!(!err.is_connection());
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "Rancher API error (HTTP 403): forbidden");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: RancherError = ValidationError::Format("bad".to_string()).into();
        assert!(matches!(err, RancherError::Validation(_)));
    }
}

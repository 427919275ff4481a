use crate::core::domain::error::ValidationError;
use std::fmt;

/// A static Rancher API bearer token.
///
/// The secret never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct RancherToken {
    value: String,
}

impl RancherToken {
    /// Validates and wraps a bearer token.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into().trim().to_string();
        validate_token(&value)?;
        Ok(Self { value })
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl fmt::Debug for RancherToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RancherToken").field("value", &"***").finish()
    }
}

/// Validates the format of a token string.
pub(crate) fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "token".to_string(),
            message: "API token cannot be empty".to_string(),
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "API token must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

use crate::core::domain::value_object::{RancherToken, RancherUrl};

/// Where and how to reach the Rancher API.
///
/// Immutable once built; shared read-only by every request.
#[derive(Debug, Clone)]
pub struct RancherConnection {
    base_url: RancherUrl,
    token: RancherToken,
    verify_tls: bool,
}

impl RancherConnection {
    pub fn new(base_url: RancherUrl, token: RancherToken, verify_tls: bool) -> Self {
        Self {
            base_url,
            token,
            verify_tls,
        }
    }

    pub fn base_url(&self) -> &RancherUrl {
        &self.base_url
    }

    pub fn token(&self) -> &RancherToken {
        &self.token
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns `true` when certificate verification is disabled.
    pub fn accepts_invalid_certs(&self) -> bool {
        !self.verify_tls
    }
}

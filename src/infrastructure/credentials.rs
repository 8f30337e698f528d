use crate::domain::ports::{Authenticator, Credentials};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The single account accepted by [`StaticAuthenticator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub identifier: String,
    pub secret: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            identifier: "Sales_team".to_string(),
            secret: "Raman@2002".to_string(),
        }
    }
}

/// Placeholder credential check: exactly one identifier/secret pair is
/// accepted, after a simulated round-trip.
pub struct StaticAuthenticator {
    accepted: CredentialsConfig,
    latency: Duration,
}

impl StaticAuthenticator {
    pub fn new(accepted: CredentialsConfig, latency: Duration) -> Self {
        Self { accepted, latency }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(credentials.identifier == self.accepted.identifier
            && credentials.secret == self.accepted.secret)
    }
}

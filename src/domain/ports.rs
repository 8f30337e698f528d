use super::currency::RateTable;
use crate::error::Result;
use async_trait::async_trait;

/// Identifier and secret entered at the login gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

/// Supplies exchange rates on demand.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable>;
}

/// Allows or denies a login attempt. There is no partial outcome.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool>;
}

pub type RateSourceBox = Box<dyn RateSource>;
pub type AuthenticatorBox = Box<dyn Authenticator>;

use super::engine::{Quote, QuoteEngine};
use crate::domain::currency::RateTable;
use crate::domain::market::PriceRequest;
use crate::domain::ports::{AuthenticatorBox, Credentials};
use crate::error::{CalculatorError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// What happened to a calculation once its rates arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    /// The quote is now the session's current result.
    Applied(Quote),
    /// A newer request, or a logout, was issued while this one was in
    /// flight. The quote was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<String>,
    latest: Option<Quote>,
    rates: RateTable,
}

/// Login gate plus the calculator's display state.
///
/// Every calculation takes a sequence ticket before awaiting the rate
/// source. When the rates come back the quote is only stored if its ticket
/// is still the newest one, so the latest request always wins.
pub struct CalculatorSession {
    authenticator: AuthenticatorBox,
    engine: QuoteEngine,
    state: RwLock<SessionState>,
    sequence: AtomicU64,
}

impl CalculatorSession {
    pub fn new(authenticator: AuthenticatorBox, engine: QuoteEngine) -> Self {
        Self {
            authenticator,
            engine,
            state: RwLock::new(SessionState::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Checks the credentials and opens the gate on success.
    ///
    /// A denial is not an error: it returns `Ok(false)` and leaves the
    /// session signed out.
    pub async fn login(&self, credentials: &Credentials) -> Result<bool> {
        let accepted = self.authenticator.authenticate(credentials).await?;
        if accepted {
            info!(user = %credentials.identifier, "login successful");
            self.state.write().await.user = Some(credentials.identifier.clone());
        } else {
            warn!(user = %credentials.identifier, "login denied");
        }
        Ok(accepted)
    }

    /// Signs out and clears the current result. In-flight calculations are
    /// discarded when they complete.
    pub async fn logout(&self) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        if let Some(user) = state.user.take() {
            info!(user = %user, "logged out");
        }
        state.latest = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    pub async fn user(&self) -> Option<String> {
        self.state.read().await.user.clone()
    }

    /// The most recently applied quote, if any.
    pub async fn latest(&self) -> Option<Quote> {
        self.state.read().await.latest.clone()
    }

    /// Rates of the last applied quote, or the baseline before the first one.
    pub async fn rates(&self) -> RateTable {
        self.state.read().await.rates
    }

    pub async fn calculate(&self, request: PriceRequest) -> Result<CalculationOutcome> {
        if !self.is_authenticated().await {
            return Err(CalculatorError::NotAuthenticated);
        }

        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let quote = self.engine.quote(request).await?;

        let mut state = self.state.write().await;
        if self.sequence.load(Ordering::SeqCst) != ticket || state.user.is_none() {
            debug!(ticket, "discarding superseded calculation");
            return Ok(CalculationOutcome::Superseded);
        }
        state.rates = quote.rates;
        state.latest = Some(quote.clone());
        Ok(CalculationOutcome::Applied(quote))
    }
}

use crate::domain::currency::RateTable;
use crate::domain::ports::RateSource;
use crate::error::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Centre and spread of the simulated exchange-rate feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateBaseline {
    pub eur: Decimal,
    pub pln: Decimal,
    /// Maximum absolute offset applied to EUR.
    pub eur_jitter: Decimal,
    /// Maximum absolute offset applied to PLN.
    pub pln_jitter: Decimal,
}

impl Default for RateBaseline {
    fn default() -> Self {
        Self {
            eur: RateTable::BASELINE_EUR,
            pln: RateTable::BASELINE_PLN,
            eur_jitter: dec!(0.01),
            pln_jitter: dec!(0.05),
        }
    }
}

impl RateBaseline {
    /// The baseline itself, without any jitter.
    pub fn table(&self) -> Result<RateTable> {
        RateTable::new(self.eur, self.pln)
    }
}

/// Draws a fresh rate table around `baseline`.
///
/// Offsets are uniform over a 0.0001 grid within `[-jitter, +jitter]`.
pub fn refresh_rates<R: Rng>(baseline: &RateBaseline, rng: &mut R) -> Result<RateTable> {
    let eur = baseline.eur + offset(rng, baseline.eur_jitter);
    let pln = baseline.pln + offset(rng, baseline.pln_jitter);
    RateTable::new(eur, pln)
}

fn offset<R: Rng>(rng: &mut R, jitter: Decimal) -> Decimal {
    let steps = (jitter.abs() * dec!(10000)).trunc().to_i64().unwrap_or(0);
    if steps == 0 {
        return Decimal::ZERO;
    }
    Decimal::new(rng.gen_range(-steps..=steps), 4)
}

/// Simulated live feed: each fetch waits `latency`, then jitters the baseline.
pub struct JitteredRateSource {
    baseline: RateBaseline,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl JitteredRateSource {
    pub fn new(baseline: RateBaseline, latency: Duration) -> Self {
        Self::with_rng(baseline, latency, StdRng::from_entropy())
    }

    /// Deterministic variant, mostly for tests.
    pub fn seeded(baseline: RateBaseline, latency: Duration, seed: u64) -> Self {
        Self::with_rng(baseline, latency, StdRng::seed_from_u64(seed))
    }

    fn with_rng(baseline: RateBaseline, latency: Duration, rng: StdRng) -> Self {
        Self {
            baseline,
            latency,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl RateSource for JitteredRateSource {
    async fn fetch_rates(&self) -> Result<RateTable> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let mut rng = self.rng.lock().await;
        let rates = refresh_rates(&self.baseline, &mut *rng)?;
        debug!(eur = %rates.eur(), pln = %rates.pln(), "refreshed exchange rates");
        Ok(rates)
    }
}

/// Always returns the same table. Stands in for a provider whose quote has
/// already been fetched.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource {
    rates: RateTable,
    latency: Duration,
}

impl FixedRateSource {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_rates(&self) -> Result<RateTable> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.rates)
    }
}

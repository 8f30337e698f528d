use crate::domain::currency::RateTable;
use crate::domain::market::PriceRequest;
use crate::domain::ports::RateSourceBox;
use crate::domain::pricing::{PriceBreakdown, PricingEngine};
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// One priced request together with the rates it was priced against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub request: PriceRequest,
    pub rates: RateTable,
    pub breakdown: PriceBreakdown,
}

/// Turns price requests into quotes.
///
/// `QuoteEngine` owns the rate source. Every request fetches a fresh rate
/// table, so two quotes for the same request may differ in their Western
/// Europe surcharge and in their EUR/PLN figures.
pub struct QuoteEngine {
    pricing: PricingEngine,
    rate_source: RateSourceBox,
}

impl QuoteEngine {
    /// Creates a new `QuoteEngine`.
    ///
    /// # Arguments
    ///
    /// * `pricing` - The pricing rules to apply.
    /// * `rate_source` - Where exchange rates come from.
    pub fn new(pricing: PricingEngine, rate_source: RateSourceBox) -> Self {
        Self {
            pricing,
            rate_source,
        }
    }

    /// Fetches rates and prices the request against them.
    pub async fn quote(&self, request: PriceRequest) -> Result<Quote> {
        let rates = self.rate_source.fetch_rates().await?;
        let breakdown = self.pricing.compute_request(&request, &rates)?;
        debug!(
            market = %request.market,
            price_per_mt = %request.price_per_mt,
            distance = %request.distance,
            delivery_rate = %breakdown.delivery_rate,
            "priced request"
        );
        Ok(Quote {
            request,
            rates,
            breakdown,
        })
    }
}

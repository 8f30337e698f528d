//! CIF and DDP price derivation.
//!
//! Everything here is pure arithmetic on `Decimal`. Nothing is rounded; the
//! presentation layer rounds to two decimals when it formats an amount.

use super::currency::RateTable;
use super::market::{Market, PriceRequest};
use crate::error::{CalculatorError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Pricing constants.
///
/// The delivery tariff is linear: `baseline_rate` per `baseline_distance` km,
/// charged per container, with short hauls billed at `minimum_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    /// Cost build-up applied to the raw commodity price to reach CIF.
    pub cif_multiplier: Decimal,
    /// Delivery rate (PLN per container) for `baseline_distance`.
    pub baseline_rate: Decimal,
    pub baseline_distance: Decimal,
    pub minimum_distance: Decimal,
    /// Metric tons per container lot.
    pub container_mt: Decimal,
    pub kg_per_mt: Decimal,
    /// Extra PLN per kg charged for Western Europe deliveries.
    pub western_europe_surcharge_pln_per_kg: Decimal,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            cif_multiplier: dec!(2.5),
            baseline_rate: dec!(4000),
            baseline_distance: dec!(500),
            minimum_distance: dec!(100),
            container_mt: dec!(25),
            kg_per_mt: dec!(1000),
            western_europe_surcharge_pln_per_kg: dec!(2),
        }
    }
}

/// Prices at the three quoted unit scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceTier {
    pub per_1kg: Decimal,
    pub per_1mt: Decimal,
    pub per_25mt: Decimal,
}

/// Full result of a calculation, in USD.
///
/// `delivery_rate` is the per-container tariff in PLN. It is added to the USD
/// figures as-is, without conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub cif: PriceTier,
    pub ddp: PriceTier,
    pub delivery_rate: Decimal,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    tariff: Tariff,
}

impl PricingEngine {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Delivery rate per container for `distance` km.
    ///
    /// Zero distance costs nothing; anything else is billed for at least
    /// `minimum_distance`. Negative distances are not rejected and end up on
    /// the minimum.
    pub fn compute_delivery_rate(&self, distance: Decimal) -> Result<Decimal> {
        if distance.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let effective = distance.max(self.tariff.minimum_distance);
        mul(
            div(effective, self.tariff.baseline_distance)?,
            self.tariff.baseline_rate,
        )
    }

    /// Fails only when an intermediate amount leaves the `Decimal` range.
    pub fn compute_breakdown(
        &self,
        price_per_mt: Decimal,
        distance: Decimal,
        market: Market,
        rates: &RateTable,
    ) -> Result<PriceBreakdown> {
        let t = &self.tariff;
        let container_kg = mul(t.container_mt, t.kg_per_mt)?;

        let cif_per_1mt = mul(price_per_mt, t.cif_multiplier)?;
        let cif = PriceTier {
            per_1kg: div(cif_per_1mt, t.kg_per_mt)?,
            per_1mt: cif_per_1mt,
            per_25mt: mul(cif_per_1mt, t.container_mt)?,
        };

        let delivery_rate = self.compute_delivery_rate(distance)?;

        let ddp = match market {
            Market::Poland => PriceTier {
                per_1kg: add(cif.per_1kg, div(delivery_rate, container_kg)?)?,
                per_1mt: add(cif.per_1mt, div(delivery_rate, t.container_mt)?)?,
                per_25mt: add(cif.per_25mt, delivery_rate)?,
            },
            // Scales up from the per-kg figure instead of per unit.
            Market::WesternEurope => {
                let surcharge = div(t.western_europe_surcharge_pln_per_kg, rates.pln())?;
                let per_1kg = add(
                    add(cif.per_1kg, surcharge)?,
                    div(delivery_rate, container_kg)?,
                )?;
                let per_1mt = mul(per_1kg, t.kg_per_mt)?;
                PriceTier {
                    per_1kg,
                    per_1mt,
                    per_25mt: mul(per_1mt, t.container_mt)?,
                }
            }
        };

        Ok(PriceBreakdown {
            cif,
            ddp,
            delivery_rate,
        })
    }

    pub fn compute_request(
        &self,
        request: &PriceRequest,
        rates: &RateTable,
    ) -> Result<PriceBreakdown> {
        self.compute_breakdown(
            request.price_per_mt,
            request.distance,
            request.market,
            rates,
        )
    }
}

fn out_of_range() -> CalculatorError {
    CalculatorError::ValidationError("amount out of range".to_string())
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(out_of_range)
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(out_of_range)
}

// Also covers a zero divisor coming from a misconfigured tariff.
fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_div(b).ok_or_else(out_of_range)
}

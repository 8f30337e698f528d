use crate::error::CalculatorError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currencies. All prices are computed in USD first.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Pln,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Pln];

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Pln => "zł",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Pln => "PLN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Units of each currency per 1 USD.
///
/// USD is pinned to 1. EUR and PLN must be strictly positive, which keeps the
/// PLN division in the Western Europe surcharge well defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RateTable {
    usd: Decimal,
    eur: Decimal,
    pln: Decimal,
}

impl RateTable {
    pub const BASELINE_EUR: Decimal = dec!(0.92);
    pub const BASELINE_PLN: Decimal = dec!(4.25);

    pub fn new(eur: Decimal, pln: Decimal) -> Result<Self, CalculatorError> {
        if eur <= Decimal::ZERO || pln <= Decimal::ZERO {
            return Err(CalculatorError::ValidationError(format!(
                "exchange rates must be positive (EUR {eur}, PLN {pln})"
            )));
        }
        Ok(Self {
            usd: Decimal::ONE,
            eur,
            pln,
        })
    }

    pub fn rate(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Pln => self.pln,
        }
    }

    pub fn eur(&self) -> Decimal {
        self.eur
    }

    pub fn pln(&self) -> Decimal {
        self.pln
    }

    /// Footer lines shown under a result, e.g. `1 USD = 0.9200 EUR`.
    pub fn summary(&self) -> [String; 2] {
        [
            format!("1 USD = {:.4} EUR", round_half_up(self.eur, 4)),
            format!("1 USD = {:.2} PLN", round_half_up(self.pln, 2)),
        ]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            usd: Decimal::ONE,
            eur: Self::BASELINE_EUR,
            pln: Self::BASELINE_PLN,
        }
    }
}

/// Converts a USD amount and renders it with the currency symbol and two
/// decimals, e.g. `$1346.00` or `zł5720.50`.
///
/// A conversion that leaves the `Decimal` range renders as `Infinity` (or
/// `-Infinity`) after the symbol.
pub fn format(amount_usd: Decimal, currency: Currency, rates: &RateTable) -> String {
    let rate = rates.rate(currency);
    match amount_usd.checked_mul(rate) {
        Some(converted) => format!("{}{:.2}", currency.symbol(), round_half_up(converted, 2)),
        None if amount_usd.is_sign_negative() => format!("{}-Infinity", currency.symbol()),
        None => format!("{}Infinity", currency.symbol()),
    }
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

use crate::error::CalculatorError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destination market of a delivery.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Market {
    Poland,
    WesternEurope,
}

impl Market {
    /// Human readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Market::Poland => "Poland",
            Market::WesternEurope => "Western Europe",
        }
    }

    /// Machine form, as accepted on the command line and in CSV input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Poland => "poland",
            Market::WesternEurope => "western-europe",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poland" => Ok(Market::Poland),
            "western-europe" => Ok(Market::WesternEurope),
            other => Err(CalculatorError::ValidationError(format!(
                "unknown market '{other}', expected 'poland' or 'western-europe'"
            ))),
        }
    }
}

impl TryFrom<String> for Market {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single pricing request as entered by a sales user.
///
/// Values are taken as-is: zero or negative figures flow through the
/// arithmetic unchanged. Checking that fields are present and numeric is the
/// job of whatever reads the request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct PriceRequest {
    /// Commodity price in USD per metric ton.
    pub price_per_mt: Decimal,
    /// Delivery distance in kilometres.
    pub distance: Decimal,
    pub market: Market,
}

impl PriceRequest {
    pub fn new(price_per_mt: Decimal, distance: Decimal, market: Market) -> Self {
        Self {
            price_per_mt,
            distance,
            market,
        }
    }
}

//! Rice pricing calculator.
//!
//! Converts a commodity price (USD per metric ton) and a delivery distance
//! into CIF and DDP prices per kilogram, per metric ton and per 25 MT
//! container, shown in USD, EUR and PLN. Exchange rates and the login check
//! are collaborators behind the ports in [`domain::ports`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

use application::engine::QuoteEngine;
use application::session::CalculatorSession;
use config::CalculatorConfig;
use domain::ports::{AuthenticatorBox, RateSourceBox};
use domain::pricing::PricingEngine;
use error::Result;
use infrastructure::credentials::StaticAuthenticator;
use infrastructure::rates::{FixedRateSource, JitteredRateSource};

/// Wires a session from configuration.
///
/// With `fixed_rates` the rate source always serves the configured baseline;
/// otherwise it jitters around it like a live feed would.
pub fn build_session(config: &CalculatorConfig, fixed_rates: bool) -> Result<CalculatorSession> {
    let rate_source: RateSourceBox = if fixed_rates {
        Box::new(FixedRateSource::new(config.rates.table()?).with_latency(config.latency.rates()))
    } else {
        // Fail on a bad baseline now rather than on the first fetch.
        config.rates.table()?;
        Box::new(JitteredRateSource::new(config.rates, config.latency.rates()))
    };
    let authenticator: AuthenticatorBox = Box::new(StaticAuthenticator::new(
        config.credentials.clone(),
        config.latency.login(),
    ));
    let engine = QuoteEngine::new(PricingEngine::new(config.tariff), rate_source);
    Ok(CalculatorSession::new(authenticator, engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::CalculationOutcome;
    use crate::config::LatencyConfig;
    use crate::domain::market::{Market, PriceRequest};
    use crate::domain::ports::Credentials;
    use crate::error::CalculatorError;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_build_session_end_to_end() {
        let config = CalculatorConfig {
            latency: LatencyConfig::NONE,
            ..CalculatorConfig::default()
        };
        let session = build_session(&config, true).unwrap();
        assert!(
            session
                .login(&Credentials::new("Sales_team", "Raman@2002"))
                .await
                .unwrap()
        );

        let outcome = session
            .calculate(PriceRequest::new(dec!(1000), dec!(500), Market::WesternEurope))
            .await
            .unwrap();
        let CalculationOutcome::Applied(quote) = outcome else {
            panic!("expected the quote to be applied");
        };
        assert_eq!(quote.breakdown.ddp.per_1kg.round_dp(4), dec!(3.1306));
    }

    #[test]
    fn test_build_session_rejects_bad_baseline() {
        let mut config = CalculatorConfig::default();
        config.rates.pln = dec!(0);
        assert!(matches!(
            build_session(&config, false),
            Err(CalculatorError::ValidationError(_))
        ));
    }
}

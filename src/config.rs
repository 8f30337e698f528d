//! Calculator configuration, loaded from TOML.
//!
//! Every section is optional and falls back to the stock values, so an empty
//! file is a valid configuration.

use crate::domain::pricing::Tariff;
use crate::error::Result;
use crate::infrastructure::credentials::CredentialsConfig;
use crate::infrastructure::rates::RateBaseline;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub tariff: Tariff,
    pub rates: RateBaseline,
    pub latency: LatencyConfig,
    pub credentials: CredentialsConfig,
}

/// Simulated round-trip times of the external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub rates_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            rates_ms: 1000,
        }
    }
}

impl LatencyConfig {
    pub const NONE: Self = Self {
        login_ms: 0,
        rates_ms: 0,
    };

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn rates(&self) -> Duration {
        Duration::from_millis(self.rates_ms)
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.tariff.cif_multiplier, dec!(2.5));
        assert_eq!(config.latency.login(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_sections() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            [tariff]
            minimum_distance = "150"

            [rates]
            pln = "4.30"

            [latency]
            rates_ms = 0

            [credentials]
            identifier = "ops"
            "#,
        )
        .unwrap();

        assert_eq!(config.tariff.minimum_distance, dec!(150));
        assert_eq!(config.tariff.baseline_rate, dec!(4000));
        assert_eq!(config.rates.pln, dec!(4.30));
        assert_eq!(config.rates.eur, dec!(0.92));
        assert_eq!(config.latency, LatencyConfig { login_ms: 1000, rates_ms: 0 });
        assert_eq!(config.credentials.identifier, "ops");
        assert_eq!(config.credentials.secret, "Raman@2002");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CalculatorConfig::from_toml_str("[tariff\n"),
            Err(crate::error::CalculatorError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        std::fs::write(&path, "[latency]\nlogin_ms = 0\nrates_ms = 0\n").unwrap();
        let config = CalculatorConfig::load(&path).unwrap();
        assert_eq!(config.latency, LatencyConfig::NONE);
    }
}

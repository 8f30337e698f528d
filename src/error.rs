use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not authenticated: sign in before calculating prices")]
    NotAuthenticated,
    #[error("Rate source error: {0}")]
    RateSourceError(String),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

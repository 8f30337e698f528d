pub mod credentials;
pub mod rates;

//! Pricing rules and the collaborator ports the application depends on.

pub mod currency;
pub mod market;
pub mod ports;
pub mod pricing;

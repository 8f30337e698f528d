//! Application layer orchestrating the pricing core and its collaborators.
//!
//! `QuoteEngine` pairs the pricing rules with a rate source, and
//! `CalculatorSession` puts a login gate and last-write-wins result state in
//! front of it.

pub mod engine;
pub mod session;

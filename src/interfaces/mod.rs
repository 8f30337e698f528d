//! Adapters between the calculator and the outside world: CSV batches and
//! the text report.

pub mod csv;
pub mod report;

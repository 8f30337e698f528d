use crate::domain::market::PriceRequest;
use crate::error::{CalculatorError, Result};
use std::io::Read;

/// Reads price requests from a CSV source with the header
/// `price_per_mt,distance,market`.
///
/// Wraps `csv::Reader` and yields one `Result<PriceRequest>` per row, so a bad
/// row does not stop the rest of the batch.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PriceRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalculatorError::from))
    }
}

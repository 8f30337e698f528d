use crate::application::engine::Quote;
use crate::domain::currency::{Currency, format};
use crate::error::Result;
use std::io::Write;

const SCALES: [&str; 3] = ["1kg", "1mt", "25mt"];

/// Writes quotes as CSV, one row per quote.
///
/// Amounts are written already converted and formatted, e.g. `€1238.32`, in
/// the order `{cif,ddp}_{1kg,1mt,25mt}_{usd,eur,pln}`.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            header_written: false,
        }
    }

    pub fn header() -> Vec<String> {
        let mut header = vec![
            "market".to_string(),
            "distance".to_string(),
            "delivery_rate_pln".to_string(),
        ];
        for basis in ["cif", "ddp"] {
            for scale in SCALES {
                for currency in Currency::ALL {
                    header.push(format!(
                        "{basis}_{scale}_{}",
                        currency.code().to_ascii_lowercase()
                    ));
                }
            }
        }
        header
    }

    pub fn write_quote(&mut self, quote: &Quote) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(Self::header())?;
            self.header_written = true;
        }

        let b = &quote.breakdown;
        let mut record = vec![
            quote.request.market.to_string(),
            quote.request.distance.normalize().to_string(),
            b.delivery_rate.normalize().to_string(),
        ];
        for tier in [b.cif, b.ddp] {
            for amount in [tier.per_1kg, tier.per_1mt, tier.per_25mt] {
                for currency in Currency::ALL {
                    record.push(format(amount, currency, &quote.rates));
                }
            }
        }
        self.writer.write_record(&record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::RateTable;
    use crate::domain::market::{Market, PriceRequest};
    use crate::domain::pricing::PricingEngine;
    use rust_decimal_macros::dec;

    fn quote(request: PriceRequest) -> Quote {
        let rates = RateTable::default();
        Quote {
            request,
            rates,
            breakdown: PricingEngine::default()
                .compute_request(&request, &rates)
                .unwrap(),
        }
    }

    #[test]
    fn test_header_layout() {
        let header = QuoteWriter::<Vec<u8>>::header();
        assert_eq!(header.len(), 3 + 18);
        assert_eq!(header[3], "cif_1kg_usd");
        assert_eq!(header[5], "cif_1kg_pln");
        assert_eq!(header[20], "ddp_25mt_pln");
    }

    #[test]
    fn test_writes_formatted_rows() {
        let mut buf = Vec::new();
        {
            let mut writer = QuoteWriter::new(&mut buf);
            writer
                .write_quote(&quote(PriceRequest::new(dec!(500), dec!(300), Market::Poland)))
                .unwrap();
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();

        assert!(lines.next().unwrap().starts_with("market,distance,delivery_rate_pln,cif_1kg_usd"));
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(row[0], "poland");
        assert_eq!(row[1], "300");
        assert_eq!(row[2], "2400");
        assert_eq!(row[3], "$1.25");
        // ddp_1mt_usd
        assert_eq!(row[3 + 9 + 3], "$1346.00");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_header_written_once() {
        let mut buf = Vec::new();
        {
            let mut writer = QuoteWriter::new(&mut buf);
            for price in [dec!(100), dec!(200)] {
                writer
                    .write_quote(&quote(PriceRequest::new(price, dec!(50), Market::WesternEurope)))
                    .unwrap();
            }
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert_eq!(output.matches("market,").count(), 1);
    }
}

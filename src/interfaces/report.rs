use crate::application::engine::Quote;
use crate::domain::currency::{Currency, RateTable, format};
use crate::domain::market::Market;
use crate::domain::pricing::PriceTier;
use rust_decimal::Decimal;
use std::fmt;

/// Renders a quote as the plain-text results panel.
pub fn render(quote: &Quote) -> String {
    Report(quote).to_string()
}

/// The results panel: market, delivery hint, CIF and DDP sections, rates.
pub struct Report<'a>(pub &'a Quote);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.0;
        let b = &quote.breakdown;

        writeln!(f, "Price Results ({})", quote.request.market.label())?;
        write_delivery_hint(f, quote.request.market, b.delivery_rate)?;
        writeln!(f)?;
        writeln!(f, "CIF Prices")?;
        write_tier(f, &b.cif, &quote.rates)?;
        writeln!(f)?;
        writeln!(f, "DDP Prices")?;
        write_tier(f, &b.ddp, &quote.rates)?;
        writeln!(f)?;
        writeln!(f, "Current Exchange Rates")?;
        for line in quote.rates.summary() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

fn write_delivery_hint(
    f: &mut fmt::Formatter<'_>,
    market: Market,
    delivery_rate: Decimal,
) -> fmt::Result {
    writeln!(
        f,
        "Delivery rate: {} PLN per container",
        delivery_rate.normalize()
    )?;
    if market == Market::WesternEurope {
        writeln!(f, "Includes additional 2 PLN per kg markup for Western Europe")?;
    }
    Ok(())
}

fn write_tier(f: &mut fmt::Formatter<'_>, tier: &PriceTier, rates: &RateTable) -> fmt::Result {
    for (label, amount) in [
        ("1 KG", tier.per_1kg),
        ("1 MT", tier.per_1mt),
        ("25 MT (Container)", tier.per_25mt),
    ] {
        let [usd, eur, pln] = Currency::ALL.map(|c| format(amount, c, rates));
        writeln!(f, "  {label:<18} {usd:>14}   {eur} • {pln}")?;
    }
    Ok(())
}

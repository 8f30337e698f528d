use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use rice_pricing::application::session::CalculationOutcome;
use rice_pricing::build_session;
use rice_pricing::config::{CalculatorConfig, LatencyConfig};
use rice_pricing::domain::market::{Market, PriceRequest};
use rice_pricing::domain::ports::Credentials;
use rice_pricing::interfaces::csv::quote_writer::QuoteWriter;
use rice_pricing::interfaces::csv::request_reader::RequestReader;
use rice_pricing::interfaces::report;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rice pricing calculator: CIF and DDP prices in USD, EUR and PLN", long_about = None)]
struct Cli {
    /// TOML configuration file (tariff, rates, latency, credentials)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Sales team ID
    #[arg(long, global = true, default_value = "")]
    user: String,

    /// Password for the sales team ID
    #[arg(long, global = true, default_value = "")]
    password: String,

    /// Price against the baseline exchange rates instead of a jittered feed
    #[arg(long, global = true)]
    fixed_rates: bool,

    /// Skip the simulated login and rate-feed round-trips
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a single request and print the results panel
    Quote {
        /// Rice price in USD per metric ton
        #[arg(long)]
        price: Decimal,

        /// Delivery distance in kilometres
        #[arg(long)]
        distance: Decimal,

        /// Destination market: poland or western-europe
        #[arg(long, default_value = "poland")]
        market: Market,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Price every row of a CSV file (price_per_mt,distance,market) and write
    /// the quotes as CSV to stdout
    Batch {
        /// Input requests CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Respects RUST_LOG, warnings by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path).into_diagnostic()?,
        None => CalculatorConfig::default(),
    };
    if cli.no_latency {
        config.latency = LatencyConfig::NONE;
    }

    let session = build_session(&config, cli.fixed_rates).into_diagnostic()?;

    let credentials = Credentials::new(cli.user, cli.password);
    if !session.login(&credentials).await.into_diagnostic()? {
        return Err(miette!("Login failed: invalid credentials. Please try again."));
    }

    match cli.command {
        Command::Quote {
            price,
            distance,
            market,
            json,
        } => {
            let request = PriceRequest::new(price, distance, market);
            let quote = match session.calculate(request).await.into_diagnostic()? {
                CalculationOutcome::Applied(quote) => quote,
                CalculationOutcome::Superseded => {
                    return Err(miette!("Calculation was superseded by a newer request"));
                }
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&quote).into_diagnostic()?);
            } else {
                print!("{}", report::render(&quote));
            }
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            let stdout = io::stdout();
            let mut writer = QuoteWriter::new(stdout.lock());

            for (index, request) in reader.requests().enumerate() {
                let row = index + 1;
                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        warn!(row, error = %e, "Skipping row: malformed request");
                        continue;
                    }
                };
                match session.calculate(request).await {
                    Ok(CalculationOutcome::Applied(quote)) => {
                        writer.write_quote(&quote).into_diagnostic()?
                    }
                    Ok(CalculationOutcome::Superseded) => {
                        warn!(row, "Skipping row: calculation superseded")
                    }
                    Err(e) => warn!(row, error = %e, "Skipping row: pricing failed"),
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

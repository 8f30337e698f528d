#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::io::Error;
use std::path::Path;
use std::process::Command;

pub const USER: &str = "Sales_team";
pub const PASSWORD: &str = "Raman@2002";

/// Writes a requests CSV with the given `(price_per_mt, distance, market)` rows.
pub fn write_requests(path: &Path, rows: &[[&str; 3]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["price_per_mt", "distance", "market"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Binary with valid credentials, no simulated latency, baseline rates and a
/// clean log filter.
pub fn calculator() -> Command {
    let mut cmd = Command::new(cargo_bin!("rice-pricing"));
    cmd.env_remove("RUST_LOG")
        .args(["--user", USER, "--password", PASSWORD])
        .args(["--no-latency", "--fixed-rates"]);
    cmd
}

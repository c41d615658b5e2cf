//! CSV-based tax rate loader
//!
//! Loads zip-level rates and state averages from CSV files in data/tax_rates/

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use super::{validate_zip, TaxRateRecord};
use crate::error::{MortgageError, Result};

/// Default path to the tax rate data directory
pub const DEFAULT_TAX_DATA_PATH: &str = "data/tax_rates";

#[derive(Debug, serde::Deserialize)]
struct StateRow {
    state: String,
    rate: f64,
}

/// Load zip rates from `zip_rates.csv` (zip,rate,city,state,county)
pub fn load_zip_rates(path: &Path) -> Result<Vec<TaxRateRecord>> {
    let file = File::open(path.join("zip_rates.csv"))?;
    let records = read_zip_rates(file)?;
    info!("Loaded {} zip rates from {}", records.len(), path.display());
    Ok(records)
}

/// Load state averages from `state_averages.csv` (state,rate)
pub fn load_state_averages(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path.join("state_averages.csv"))?;
    let averages = read_state_averages(file)?;
    info!("Loaded {} state averages from {}", averages.len(), path.display());
    Ok(averages)
}

/// Parse zip rates from any reader. Zip codes are kept as text so leading
/// zeros survive, and must be five digits to be loaded.
pub fn read_zip_rates<R: Read>(reader: R) -> Result<Vec<TaxRateRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let mut record: TaxRateRecord = result?;
        record.zip = validate_zip(&record.zip)?.to_string();
        check_rate(&record.zip, record.rate)?;
        records.push(record);
    }

    Ok(records)
}

pub fn read_state_averages<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut averages = Vec::new();

    for result in csv_reader.deserialize() {
        let row: StateRow = result?;
        check_rate(&row.state, row.rate)?;
        averages.push((row.state, row.rate));
    }

    Ok(averages)
}

fn check_rate(key: &str, rate: f64) -> Result<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(MortgageError::invalid("rate", format!("{key}: {rate} is not a valid tax rate")))
    }
}

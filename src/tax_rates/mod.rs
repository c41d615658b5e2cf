//! Property tax rate suggestions by zip code and state
//!
//! A static key -> value lookup. Nothing here touches the network: a caller
//! that geocodes a zip code elsewhere passes the resulting `Location` in and
//! gets the state average back as an ordinary value.

mod builtin;
pub mod loader;

pub use builtin::NATIONAL_AVERAGE_RATE;
pub use loader::DEFAULT_TAX_DATA_PATH;

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MortgageError, Result};

/// One zip code's entry in the local table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateRecord {
    pub zip: String,
    pub rate: f64,
    pub city: String,
    pub state: String,
    pub county: String,
}

/// Where a looked-up rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRateSource {
    LocalData,
    StateAverage,
    NationalAverage,
}

/// Place information for a zip code, as resolved by an external geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub county: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateLookup {
    pub zip: String,
    pub rate: f64,
    pub city: String,
    pub state: String,
    pub county: String,
    pub source: TaxRateSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Labelled preset rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRate {
    pub label: String,
    pub rate: f64,
    pub description: String,
}

/// Zip-level rates, state averages and the national fallback
#[derive(Debug, Clone)]
pub struct TaxRateTable {
    zips: HashMap<String, TaxRateRecord>,
    state_averages: HashMap<String, f64>,
    national_average: f64,
}

impl TaxRateTable {
    /// Table with the built-in zip and state data
    pub fn builtin() -> Self {
        let zips = builtin::ZIP_RATES
            .iter()
            .map(|&(zip, rate, city, state, county)| TaxRateRecord {
                zip: zip.to_string(),
                rate,
                city: city.to_string(),
                state: state.to_string(),
                county: county.to_string(),
            });
        let states = builtin::STATE_AVERAGES
            .iter()
            .map(|&(state, rate)| (state.to_string(), rate));

        Self::from_parts(zips, states, NATIONAL_AVERAGE_RATE)
    }

    pub fn from_parts(
        zips: impl IntoIterator<Item = TaxRateRecord>,
        state_averages: impl IntoIterator<Item = (String, f64)>,
        national_average: f64,
    ) -> Self {
        Self {
            zips: zips.into_iter().map(|r| (r.zip.clone(), r)).collect(),
            state_averages: state_averages
                .into_iter()
                .map(|(state, rate)| (state.to_ascii_uppercase(), rate))
                .collect(),
            national_average,
        }
    }

    /// Load tables from CSV files in the default location (data/tax_rates/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_TAX_DATA_PATH))
    }

    /// Load `zip_rates.csv` and `state_averages.csv` from a directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let zips = loader::load_zip_rates(path)?;
        let states = loader::load_state_averages(path)?;
        Ok(Self::from_parts(zips, states, NATIONAL_AVERAGE_RATE))
    }

    pub fn zip_count(&self) -> usize {
        self.zips.len()
    }

    pub fn national_average(&self) -> f64 {
        self.national_average
    }

    /// Average rate for a two-letter state code (case-insensitive)
    pub fn state_average(&self, state: &str) -> Option<f64> {
        self.state_averages.get(&state.trim().to_ascii_uppercase()).copied()
    }

    /// Look up a zip code in the local table, falling back to the national average
    pub fn lookup_zip(&self, zip: &str) -> Result<TaxRateLookup> {
        self.lookup_zip_with_location(zip, None)
    }

    /// Look up a zip code, using the caller's resolved location to fall back
    /// to a state average before the national average.
    pub fn lookup_zip_with_location(&self, zip: &str, location: Option<&Location>) -> Result<TaxRateLookup> {
        let zip = validate_zip(zip)?;

        if let Some(record) = self.zips.get(zip) {
            debug!("Zip {} found in local table: {}", zip, record.rate);
            return Ok(TaxRateLookup {
                zip: zip.to_string(),
                rate: record.rate,
                city: record.city.clone(),
                state: record.state.clone(),
                county: record.county.clone(),
                source: TaxRateSource::LocalData,
                note: None,
            });
        }

        if let Some(location) = location {
            if let Some(rate) = self.state_average(&location.state) {
                let state = location.state.trim().to_ascii_uppercase();
                debug!("Zip {} using {} state average: {}", zip, state, rate);
                return Ok(TaxRateLookup {
                    zip: zip.to_string(),
                    rate,
                    city: location.city.clone(),
                    county: location
                        .county
                        .clone()
                        .unwrap_or_else(|| format!("{state} County")),
                    note: Some(format!(
                        "Using {state} state average. Actual rate may vary by municipality."
                    )),
                    state,
                    source: TaxRateSource::StateAverage,
                });
            }
        }

        debug!("Zip {} using national average", zip);
        Ok(TaxRateLookup {
            zip: zip.to_string(),
            rate: self.national_average,
            city: "Unknown".to_string(),
            state: "Unknown".to_string(),
            county: "Unknown".to_string(),
            source: TaxRateSource::NationalAverage,
            note: Some("Using US national average. Please verify with local tax assessor.".to_string()),
        })
    }
}

impl Default for TaxRateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Preset rates for users without a zip code
pub fn suggested_rates() -> Vec<SuggestedRate> {
    builtin::SUGGESTED_RATES
        .iter()
        .map(|&(label, rate, description)| SuggestedRate {
            label: label.to_string(),
            rate,
            description: description.to_string(),
        })
        .collect()
}

pub(crate) fn validate_zip(zip: &str) -> Result<&str> {
    let trimmed = zip.trim();
    if trimmed.len() == 5 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed)
    } else {
        Err(MortgageError::InvalidZipCode(zip.to_string()))
    }
}

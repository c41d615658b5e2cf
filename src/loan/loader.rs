//! Load mortgage scenarios from CSV
//!
//! Expected header:
//! `scenario_id,house_price,down_payment,annual_rate,term_years,property_tax_rate,annual_insurance`

use super::{MortgageInputs, MortgageScenario};
use crate::error::Result;
use csv::Reader;
use log::{debug, info};
use std::path::Path;

/// Default scenario file read by the batch runner
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row; optional cost columns may be left blank
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    scenario_id: u32,
    house_price: f64,
    down_payment: f64,
    annual_rate: f64,
    term_years: u32,
    #[serde(default)]
    property_tax_rate: Option<f64>,
    #[serde(default)]
    annual_insurance: Option<f64>,
}

impl CsvRow {
    /// A down payment at or above the price leaves no loan; the scenario
    /// still loads and amortizes to the empty result.
    fn to_scenario(self) -> MortgageScenario {
        let inputs = MortgageInputs::from_purchase(
            self.house_price,
            self.down_payment,
            self.annual_rate,
            self.term_years,
            self.property_tax_rate.unwrap_or(0.0),
            self.annual_insurance.unwrap_or(0.0),
        );

        MortgageScenario::new(self.scenario_id, self.down_payment, inputs)
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<MortgageScenario>> {
    let path = path.as_ref();
    debug!("Loading scenarios from {}", path.display());
    let reader = Reader::from_path(path)?;
    let scenarios = read_rows(reader)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<MortgageScenario>> {
    read_rows(Reader::from_reader(reader))
}

/// Load scenarios from the default location
pub fn load_default_scenarios() -> Result<Vec<MortgageScenario>> {
    load_scenarios(DEFAULT_SCENARIOS_PATH)
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<MortgageScenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario());
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;
    use crate::scenario::ScenarioRunner;

    const SAMPLE: &str = "\
scenario_id,house_price,down_payment,annual_rate,term_years,property_tax_rate,annual_insurance
1,400000,80000,0.065,30,0.025,1500
2,250000,50000,0.0,15,,
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        let first = &scenarios[0];
        assert_eq!(first.scenario_id, 1);
        assert_eq!(first.down_payment, 80_000.0);
        assert_eq!(first.inputs.principal, 320_000.0);
        assert_eq!(first.inputs.term_years, 30);
        assert_eq!(first.inputs.property_tax_rate, 0.025);

        // Blank cost columns default to zero
        let second = &scenarios[1];
        assert_eq!(second.inputs.principal, 200_000.0);
        assert_eq!(second.inputs.property_tax_rate, 0.0);
        assert_eq!(second.inputs.annual_insurance, 0.0);
    }

    #[test]
    fn test_down_payment_above_price_loads_as_empty() {
        let csv = "\
scenario_id,house_price,down_payment,annual_rate,term_years,property_tax_rate,annual_insurance
7,100000,150000,0.05,30,0.01,1000
8,100000,20000,0.05,30,0.01,1000
";
        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].inputs.principal, -50_000.0);

        let outcomes = ScenarioRunner::new().run_batch(&scenarios);
        assert_eq!(outcomes[0].scenario.scenario_id, 7);
        assert!(outcomes[0].amortization.is_empty());
        assert!(!outcomes[1].amortization.is_empty());
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let csv = "\
scenario_id,house_price,down_payment,annual_rate,term_years,property_tax_rate,annual_insurance
x,100000,10000,0.05,30,0.01,1000
";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, MortgageError::Csv(_)));
    }
}

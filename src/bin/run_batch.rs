//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Usage: cargo run --bin run_batch -- [scenarios.csv] [output.csv]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use serde::Serialize;

use mortgage_engine::loan::{load_scenarios, DEFAULT_SCENARIOS_PATH};
use mortgage_engine::{compute_charity_impact, AmortizationResult, EngineConfig, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Amortize every scenario in a CSV file")]
struct Args {
    /// Scenario CSV file
    #[arg(default_value = DEFAULT_SCENARIOS_PATH)]
    input: PathBuf,

    /// Output CSV file
    #[arg(default_value = "batch_output.csv")]
    output: PathBuf,

    /// Balance treated as paid off
    #[arg(long, default_value_t = mortgage_engine::amortization::DEFAULT_PAYOFF_TOLERANCE)]
    payoff_tolerance: f64,
}

/// One output row per scenario
#[derive(Debug, Serialize)]
struct BatchRow {
    scenario_id: u32,
    computed: bool,
    principal: f64,
    annual_rate: f64,
    term_years: u32,
    monthly_payment: f64,
    monthly_tax: f64,
    monthly_insurance: f64,
    total_monthly_payment: f64,
    total_interest_paid: f64,
    total_taxes_paid: f64,
    total_insurance_paid: f64,
    total_paid: f64,
    actual_term_months: u32,
    interest_share: f64,
    meals_provided: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(EngineConfig::with_payoff_tolerance(args.payoff_tolerance)?);

    let run_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    println!("Schedules complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut empty_count = 0;

    for outcome in &outcomes {
        let computed = !outcome.amortization.is_empty();
        if !computed {
            empty_count += 1;
            warn!("Scenario {} has nothing to amortize", outcome.scenario.scenario_id);
        }

        let result = outcome
            .amortization
            .as_result()
            .cloned()
            .unwrap_or_else(AmortizationResult::empty);
        let summary = result.summary();
        let impact = compute_charity_impact(
            result.total_interest_paid,
            result.total_taxes_paid,
            result.total_insurance_paid,
        );
        let inputs = &outcome.scenario.inputs;

        writer.serialize(BatchRow {
            scenario_id: outcome.scenario.scenario_id,
            computed,
            principal: inputs.principal,
            annual_rate: inputs.annual_rate,
            term_years: inputs.term_years,
            monthly_payment: result.monthly_payment,
            monthly_tax: result.monthly_tax,
            monthly_insurance: result.monthly_insurance,
            total_monthly_payment: result.total_monthly_payment,
            total_interest_paid: result.total_interest_paid,
            total_taxes_paid: result.total_taxes_paid,
            total_insurance_paid: result.total_insurance_paid,
            total_paid: result.total_paid,
            actual_term_months: result.actual_term_months,
            interest_share: summary.interest_share,
            meals_provided: impact.meals_provided,
        })?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Scenarios: {}", outcomes.len());
    println!("  Computed:  {}", outcomes.len() - empty_count);
    println!("  Empty:     {}", empty_count);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}

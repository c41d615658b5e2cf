//! Mortgage Engine CLI
//!
//! Command-line interface for a single mortgage calculation

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::info;

use mortgage_engine::amortization::{compute_payoff_time_months, write_schedule_csv};
use mortgage_engine::{
    compute_charity_impact, AmortizationEngine, AmortizationResult, EngineConfig, MortgageInputs,
    TaxRateTable,
};

#[derive(Debug, Parser)]
#[command(name = "mortgage_engine", version, about = "Fixed-rate mortgage amortization calculator")]
struct Args {
    /// House price
    #[arg(long, default_value_t = 400_000.0)]
    house_price: f64,

    /// Down payment
    #[arg(long, default_value_t = 80_000.0)]
    down_payment: f64,

    /// Annual interest rate as a fraction (0.065 = 6.5%)
    #[arg(long, default_value_t = 0.065)]
    rate: f64,

    /// Term in years
    #[arg(long, default_value_t = 30)]
    term: u32,

    /// Annual property tax rate as a fraction; overridden by --zip
    #[arg(long, default_value_t = 0.025)]
    tax_rate: f64,

    /// Annual home insurance premium
    #[arg(long, default_value_t = 1_500.0)]
    insurance: f64,

    /// Zip code used to look up the property tax rate
    #[arg(long)]
    zip: Option<String>,

    /// Directory with zip_rates.csv and state_averages.csv (built-in data if omitted)
    #[arg(long)]
    tax_data: Option<PathBuf>,

    /// Date of the first payment (YYYY-MM-DD), used to report the payoff date
    #[arg(long)]
    first_payment: Option<NaiveDate>,

    /// Balance treated as paid off
    #[arg(long, default_value_t = mortgage_engine::amortization::DEFAULT_PAYOFF_TOLERANCE)]
    payoff_tolerance: f64,

    /// Extra monthly payment for a payoff-time what-if
    #[arg(long)]
    extra_payment: Option<f64>,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    schedule_csv: Option<PathBuf>,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut tax_rate = args.tax_rate;
    if let Some(zip) = &args.zip {
        let table = match &args.tax_data {
            Some(dir) => TaxRateTable::from_csv_path(dir)
                .with_context(|| format!("loading tax data from {}", dir.display()))?,
            None => TaxRateTable::builtin(),
        };
        let lookup = table.lookup_zip(zip)?;
        info!("Tax rate for {}: {} ({:?})", zip, lookup.rate, lookup.source);
        tax_rate = lookup.rate;
    }

    let inputs = MortgageInputs::from_purchase(
        args.house_price,
        args.down_payment,
        args.rate,
        args.term,
        tax_rate,
        args.insurance,
    );

    let config = EngineConfig::with_payoff_tolerance(args.payoff_tolerance)?;
    let engine = AmortizationEngine::new(config);

    let Some(result) = engine.generate_schedule(&inputs).into_result() else {
        println!("Nothing to calculate: enter a price above the down payment, a term and a non-negative rate.");
        return Ok(());
    };

    if let Some(path) = &args.schedule_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_schedule_csv(file, &result)?;
        info!("Schedule written to {}", path.display());
    }

    let impact = compute_charity_impact(
        result.total_interest_paid,
        result.total_taxes_paid,
        result.total_insurance_paid,
    );

    if args.json {
        let output = serde_json::json!({
            "inputs": inputs,
            "summary": result.summary(),
            "payoff_date": args.first_payment.and_then(|d| result.payoff_date(d)),
            "charity_impact": impact,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_report(&inputs, &result, args.first_payment);

    if let Some(extra) = args.extra_payment {
        let months = compute_payoff_time_months(inputs.principal, inputs.annual_rate, result.monthly_payment + extra)?;
        println!("\nWith {:.2} extra per month: paid off in {:.1} months ({:.1} years)", extra, months, months / 12.0);
    }

    println!("\nCharity Impact (interest + taxes + insurance = ${:.2}):", impact.total_wasted);
    println!("  Meals:            {:>12}", impact.meals_provided);
    println!("  School supplies:  {:>12}", impact.school_supplies);
    println!("  Water wells:      {:>12}", impact.water_wells);
    println!("  Microloans:       {:>12}", impact.microloans);
    println!("  Vaccinations:     {:>12}", impact.vaccinations);
    println!("  Meals from interest / taxes / insurance: {} / {} / {}",
        impact.breakdown.interest_meals,
        impact.breakdown.tax_meals,
        impact.breakdown.insurance_meals,
    );

    Ok(())
}

fn print_report(inputs: &MortgageInputs, result: &AmortizationResult, first_payment: Option<NaiveDate>) {
    println!("Mortgage Engine v0.1.0");
    println!("======================\n");

    println!("Loan:");
    println!("  Principal:        ${:.2}", inputs.principal);
    println!("  Rate:             {:.3}%", inputs.annual_rate * 100.0);
    println!("  Term:             {} years", inputs.term_years);
    println!("  Property tax:     {:.2}% of ${:.2}", inputs.property_tax_rate * 100.0, inputs.house_price);
    println!("  Insurance:        ${:.2}/year", inputs.annual_insurance);
    println!();

    println!("Monthly payment:");
    println!("  Principal & interest: ${:.2}", result.monthly_payment);
    println!("  Property tax:         ${:.2}", result.monthly_tax);
    println!("  Insurance:            ${:.2}", result.monthly_insurance);
    println!("  Total:                ${:.2}", result.total_monthly_payment);
    println!();

    println!("{:>5} {:>12} {:>12} {:>14} {:>14}", "Month", "Principal", "Interest", "Balance", "Cum Interest");
    println!("{}", "-".repeat(62));
    for entry in result.schedule.iter().take(12) {
        println!("{:>5} {:>12.2} {:>12.2} {:>14.2} {:>14.2}",
            entry.month,
            entry.principal_payment,
            entry.interest_payment,
            entry.remaining_balance,
            entry.total_interest_paid,
        );
    }
    if result.schedule.len() > 12 {
        println!("... ({} more months)", result.schedule.len() - 12);
    }

    println!("\nYearly milestones:");
    for entry in result.yearly_snapshots() {
        println!("  Month {:>3}: Balance=${:.2} Interest=${:.2} Taxes=${:.2} Insurance=${:.2}",
            entry.month,
            entry.remaining_balance,
            entry.total_interest_paid,
            entry.total_taxes_paid,
            entry.total_insurance_paid,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Months to payoff: {} ({} years)", summary.total_months, summary.payoff_years);
    if let Some(date) = first_payment.and_then(|d| result.payoff_date(d)) {
        println!("  Final payment:    {}", date);
    }
    println!("  Total interest:   ${:.2}", summary.total_interest_paid);
    println!("  Total taxes:      ${:.2}", summary.total_taxes_paid);
    println!("  Total insurance:  ${:.2}", summary.total_insurance_paid);
    println!("  Total paid:       ${:.2}", summary.total_paid);
    println!("  Interest share:   {:.1}%", summary.interest_share * 100.0);
}

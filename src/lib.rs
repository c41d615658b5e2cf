//! Mortgage Engine - amortization schedules and cost summaries for fixed-rate mortgages
//!
//! This library provides:
//! - Fixed monthly payment, remaining balance and payoff-time formulas
//! - Month-by-month amortization schedules with property tax and insurance
//! - Aggregate totals and summary statistics
//! - Charity impact of interest, tax and insurance spending
//! - Property tax rate suggestions by zip code and state
//! - Batch and rate-sensitivity scenario runs

pub mod error;
pub mod loan;
pub mod amortization;
pub mod impact;
pub mod tax_rates;
pub mod scenario;

// Re-export commonly used types
pub use error::{MortgageError, Result};
pub use loan::{MortgageInputs, MortgageScenario};
pub use amortization::{
    generate_schedule, Amortization, AmortizationEngine, AmortizationResult, AmortizationSummary,
    EngineConfig, ScheduleEntry,
};
pub use impact::{compute_charity_impact, CharityUnitCosts, ImpactSummary};
pub use tax_rates::{TaxRateLookup, TaxRateTable};
pub use scenario::ScenarioRunner;

//! Scenario runner for batch and what-if amortization runs
//!
//! Holds one configured engine and runs many input sets through it. Batches
//! run in parallel; every calculation is independent so results never
//! interfere.

use rayon::prelude::*;

use crate::amortization::{Amortization, AmortizationEngine, EngineConfig};
use crate::loan::{MortgageInputs, MortgageScenario};

/// Result of one scenario in a batch
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: MortgageScenario,
    pub amortization: Amortization,
}

/// Result of one rate in a sensitivity run
#[derive(Debug, Clone)]
pub struct RateOutcome {
    pub annual_rate: f64,
    pub amortization: Amortization,
}

/// Pre-configured runner for batch calculations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for outcome in runner.run_rate_sensitivity(&inputs, &[0.055, 0.065, 0.075]) {
///     println!("{}: {:?}", outcome.annual_rate, outcome.amortization.as_result().map(|r| r.monthly_payment));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AmortizationEngine,
}

impl ScenarioRunner {
    /// Create runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: AmortizationEngine::new(config),
        }
    }

    /// Run a single calculation
    pub fn run(&self, inputs: &MortgageInputs) -> Amortization {
        self.engine.generate_schedule(inputs)
    }

    /// Run every scenario in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[MortgageScenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                scenario: *scenario,
                amortization: self.engine.generate_schedule(&scenario.inputs),
            })
            .collect()
    }

    /// Re-run one set of inputs at each of the given annual rates
    pub fn run_rate_sensitivity(&self, inputs: &MortgageInputs, rates: &[f64]) -> Vec<RateOutcome> {
        rates
            .par_iter()
            .map(|&annual_rate| {
                let adjusted = MortgageInputs {
                    annual_rate,
                    ..*inputs
                };
                RateOutcome {
                    annual_rate,
                    amortization: self.engine.generate_schedule(&adjusted),
                }
            })
            .collect()
    }

    pub fn engine(&self) -> &AmortizationEngine {
        &self.engine
    }
}

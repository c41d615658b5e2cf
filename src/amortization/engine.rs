//! Core amortization engine for monthly mortgage schedules

use log::{debug, warn};

use super::formulas::compute_monthly_payment;
use super::schedule::{Amortization, AmortizationResult, ScheduleEntry};
use super::state::AmortizationState;
use crate::error::{MortgageError, Result};
use crate::loan::MortgageInputs;

/// Balances below this many currency units count as paid off
pub const DEFAULT_PAYOFF_TOLERANCE: f64 = 0.01;

/// Configuration for schedule generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Residual balance treated as zero; absorbs floating-point drift
    /// of the closed-form payment
    pub payoff_tolerance: f64,
}

impl EngineConfig {
    pub fn with_payoff_tolerance(payoff_tolerance: f64) -> Result<Self> {
        if !payoff_tolerance.is_finite() || payoff_tolerance <= 0.0 {
            return Err(MortgageError::invalid(
                "payoff_tolerance",
                format!("must be a positive amount, got {payoff_tolerance}"),
            ));
        }
        Ok(Self { payoff_tolerance })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            payoff_tolerance: DEFAULT_PAYOFF_TOLERANCE,
        }
    }
}

/// Main amortization engine
///
/// Stateless between calls: every `generate_schedule` is independent and
/// deterministic for its inputs.
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the full monthly schedule for one set of inputs
    pub fn generate_schedule(&self, inputs: &MortgageInputs) -> Amortization {
        if !inputs.is_computable() {
            debug!(
                "Skipping schedule: principal={}, annual_rate={}, term_years={}",
                inputs.principal, inputs.annual_rate, inputs.term_years
            );
            return Amortization::Empty;
        }

        let monthly_payment =
            compute_monthly_payment(inputs.principal, inputs.annual_rate, inputs.term_years);
        let monthly_tax = inputs.monthly_tax();
        let monthly_insurance = inputs.monthly_insurance();
        let total_monthly_payment = monthly_payment + monthly_tax + monthly_insurance;

        let scheduled_months = inputs.scheduled_months();
        let mut state = AmortizationState::from_inputs(inputs);
        let mut schedule = Vec::with_capacity(scheduled_months as usize);

        for _month in 1..=scheduled_months {
            let split = state.apply_payment(
                monthly_payment,
                monthly_tax,
                monthly_insurance,
                self.config.payoff_tolerance,
            );

            schedule.push(ScheduleEntry {
                month: state.month,
                principal_and_interest: monthly_payment,
                principal_payment: split.principal,
                interest_payment: split.interest,
                property_tax: monthly_tax,
                insurance: monthly_insurance,
                total_payment: total_monthly_payment,
                remaining_balance: state.balance,
                total_interest_paid: state.total_interest_paid,
                total_taxes_paid: state.total_taxes_paid,
                total_insurance_paid: state.total_insurance_paid,
            });

            if state.is_paid_off() {
                break;
            }
        }

        if !state.is_paid_off() {
            warn!(
                "Schedule ended after {} months with residual balance {:.6} (tolerance {})",
                state.month, state.balance, self.config.payoff_tolerance
            );
        }

        let actual_term_months = schedule.len() as u32;
        debug!(
            "Amortized {:.2} over {}/{} months, payment {:.2}",
            inputs.principal, actual_term_months, scheduled_months, monthly_payment
        );

        Amortization::Computed(AmortizationResult {
            schedule,
            monthly_payment,
            monthly_tax,
            monthly_insurance,
            total_monthly_payment,
            total_interest_paid: state.total_interest_paid,
            total_taxes_paid: state.total_taxes_paid,
            total_insurance_paid: state.total_insurance_paid,
            total_paid: monthly_payment * actual_term_months as f64
                + state.total_taxes_paid
                + state.total_insurance_paid,
            actual_term_months,
        })
    }
}

/// Build a schedule from plain scalars with the default configuration
pub fn generate_schedule(
    principal: f64,
    annual_rate: f64,
    term_years: u32,
    house_price: f64,
    property_tax_rate: f64,
    annual_insurance: f64,
) -> Amortization {
    let inputs = MortgageInputs::new(
        principal,
        annual_rate,
        term_years,
        house_price,
        property_tax_rate,
        annual_insurance,
    );
    AmortizationEngine::default().generate_schedule(&inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::formulas::compute_remaining_balance;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn computed(amortization: Amortization) -> AmortizationResult {
        amortization.into_result().expect("expected a computed schedule")
    }

    #[test]
    fn test_thirty_year_schedule() {
        let result = computed(generate_schedule(320_000.0, 0.065, 30, 0.0, 0.0, 0.0));

        assert_abs_diff_eq!(result.monthly_payment, 2022.62, epsilon = 0.01);
        assert_eq!(result.schedule.len(), 360);
        assert_eq!(result.actual_term_months, 360);
        assert_eq!(result.schedule.last().unwrap().remaining_balance, 0.0);
        assert_abs_diff_eq!(result.total_interest_paid, 408_142.36, epsilon = 0.01);
    }

    #[test]
    fn test_principal_payments_sum_to_principal() {
        for &(principal, rate, years) in &[
            (320_000.0, 0.065, 30),
            (200_000.0, 0.05, 15),
            (100_000.0, 0.06, 30),
            (45_000.0, 0.12, 5),
        ] {
            let result = computed(generate_schedule(principal, rate, years, 0.0, 0.0, 0.0));
            let repaid: f64 = result.schedule.iter().map(|e| e.principal_payment).sum();
            assert_relative_eq!(repaid, principal, max_relative = 1e-9);
            assert_eq!(result.schedule.last().unwrap().remaining_balance, 0.0);
            assert!(result.actual_term_months <= years * 12);
        }
    }

    #[test]
    fn test_balance_non_increasing_and_non_negative() {
        let result = computed(generate_schedule(250_000.0, 0.0725, 30, 0.0, 0.0, 0.0));

        let mut prior = 250_000.0;
        for entry in &result.schedule {
            assert!(entry.remaining_balance >= 0.0);
            assert!(entry.remaining_balance <= prior, "balance rose at month {}", entry.month);
            prior = entry.remaining_balance;
        }
    }

    #[test]
    fn test_entries_are_consistent() {
        let result = computed(generate_schedule(320_000.0, 0.065, 30, 400_000.0, 0.025, 1_500.0));

        let mut interest_sum = 0.0;
        for (idx, entry) in result.schedule.iter().enumerate() {
            assert_eq!(entry.month, idx as u32 + 1);
            assert_abs_diff_eq!(
                entry.principal_payment + entry.interest_payment,
                entry.principal_and_interest,
                epsilon = 1e-9
            );
            assert_eq!(entry.principal_and_interest, result.monthly_payment);
            assert_eq!(entry.total_payment, result.total_monthly_payment);

            interest_sum += entry.interest_payment;
            assert_abs_diff_eq!(entry.total_interest_paid, interest_sum, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(result.total_interest_paid, interest_sum, epsilon = 1e-6);
    }

    #[test]
    fn test_iterative_balance_matches_closed_form() {
        let result = computed(generate_schedule(200_000.0, 0.05, 15, 0.0, 0.0, 0.0));

        // Skip the final month, where the clamp zeroes the drift
        for entry in &result.schedule[..result.schedule.len() - 1] {
            let closed = compute_remaining_balance(200_000.0, 0.05, result.monthly_payment, entry.month);
            assert_abs_diff_eq!(entry.remaining_balance, closed, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = computed(generate_schedule(100_000.0, 0.0, 10, 0.0, 0.0, 0.0));

        assert_eq!(result.monthly_payment, 100_000.0 / 120.0);
        assert_eq!(result.total_interest_paid, 0.0);
        assert_eq!(result.actual_term_months, 120);
        assert!(result.schedule.iter().all(|e| e.interest_payment == 0.0));
        assert_eq!(result.schedule.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_taxes_and_insurance() {
        let result = computed(generate_schedule(320_000.0, 0.065, 30, 400_000.0, 0.025, 1_500.0));

        assert_abs_diff_eq!(result.monthly_tax, 10_000.0 / 12.0, epsilon = 1e-9);
        assert_eq!(result.monthly_insurance, 125.0);
        assert_abs_diff_eq!(
            result.total_monthly_payment,
            result.monthly_payment + result.monthly_tax + result.monthly_insurance,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(result.total_taxes_paid, 300_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_insurance_paid, 45_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            result.total_paid,
            result.monthly_payment * 360.0 + result.total_taxes_paid + result.total_insurance_paid,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_absent_costs_are_exactly_zero() {
        let result = computed(generate_schedule(150_000.0, 0.04, 20, 0.0, 0.03, f64::NAN));

        assert_eq!(result.monthly_tax, 0.0);
        assert_eq!(result.monthly_insurance, 0.0);
        assert_eq!(result.total_taxes_paid, 0.0);
        assert_eq!(result.total_insurance_paid, 0.0);
        assert_eq!(result.total_monthly_payment, result.monthly_payment);
    }

    #[test]
    fn test_invalid_inputs_are_empty() {
        assert!(generate_schedule(0.0, 0.065, 30, 0.0, 0.0, 0.0).is_empty());
        assert!(generate_schedule(-1.0, 0.065, 30, 0.0, 0.0, 0.0).is_empty());
        assert!(generate_schedule(100_000.0, -0.01, 30, 0.0, 0.0, 0.0).is_empty());
        assert!(generate_schedule(100_000.0, 0.065, 0, 0.0, 0.0, 0.0).is_empty());

        let sentinel = generate_schedule(0.0, 0.065, 30, 400_000.0, 0.025, 1_500.0).result_or_empty();
        assert_eq!(sentinel.schedule.len(), 0);
        assert_eq!(sentinel.actual_term_months, 0);
        assert_eq!(sentinel.total_paid, 0.0);
        assert_eq!(sentinel.monthly_tax, 0.0);
        assert_eq!(sentinel.total_interest_paid, 0.0);
    }

    #[test]
    fn test_terms_beyond_schedule_limit_are_empty() {
        assert!(generate_schedule(100_000.0, 0.20, 4_000, 0.0, 0.0, 0.0).is_empty());
        assert!(generate_schedule(100_000.0, 0.05, u32::MAX, 0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_longest_schedule_pays_off() {
        let result = computed(generate_schedule(320_000.0, 0.065, crate::loan::MAX_SCHEDULE_YEARS, 0.0, 0.0, 0.0));

        assert!(result.monthly_payment.is_finite());
        assert_eq!(result.actual_term_months, 1_200);
        assert_eq!(result.schedule.last().unwrap().remaining_balance, 0.0);
        assert!(result.total_interest_paid.is_finite());
    }

    #[test]
    fn test_large_tolerance_stops_early() {
        let config = EngineConfig::with_payoff_tolerance(5_000.0).unwrap();
        let engine = AmortizationEngine::new(config);
        let inputs = MortgageInputs::loan_only(320_000.0, 0.065, 30);

        let result = engine.generate_schedule(&inputs).result_or_empty();
        assert!(result.actual_term_months < 360);
        assert_eq!(result.schedule.len() as u32, result.actual_term_months);
        assert_eq!(result.schedule.last().unwrap().remaining_balance, 0.0);
        assert_abs_diff_eq!(
            result.total_paid,
            result.monthly_payment * result.actual_term_months as f64,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        assert!(EngineConfig::with_payoff_tolerance(0.0).is_err());
        assert!(EngineConfig::with_payoff_tolerance(-0.01).is_err());
        assert!(EngineConfig::with_payoff_tolerance(f64::NAN).is_err());
        assert_eq!(EngineConfig::default().payoff_tolerance, DEFAULT_PAYOFF_TOLERANCE);
    }
}

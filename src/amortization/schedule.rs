//! Schedule output structures for amortization runs

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single month of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Payment month (1-indexed)
    pub month: u32,

    // Loan payment split
    pub principal_and_interest: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,

    // Non-loan costs
    pub property_tax: f64,
    pub insurance: f64,
    pub total_payment: f64,

    /// Balance after this month's payment
    pub remaining_balance: f64,

    // Running totals through this month
    pub total_interest_paid: f64,
    pub total_taxes_paid: f64,
    pub total_insurance_paid: f64,
}

/// Complete result of one amortization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Monthly schedule rows
    pub schedule: Vec<ScheduleEntry>,

    /// Principal and interest only
    pub monthly_payment: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    pub total_monthly_payment: f64,

    pub total_interest_paid: f64,
    pub total_taxes_paid: f64,
    pub total_insurance_paid: f64,

    /// Loan payments over the actual term plus taxes and insurance
    pub total_paid: f64,

    /// Length of the schedule; never exceeds the nominal term
    pub actual_term_months: u32,
}

impl AmortizationResult {
    /// The all-zero result shown before there is anything to compute
    pub fn empty() -> Self {
        Self {
            schedule: Vec::new(),
            monthly_payment: 0.0,
            monthly_tax: 0.0,
            monthly_insurance: 0.0,
            total_monthly_payment: 0.0,
            total_interest_paid: 0.0,
            total_taxes_paid: 0.0,
            total_insurance_paid: 0.0,
            total_paid: 0.0,
            actual_term_months: 0,
        }
    }

    /// Every 12th month plus the final month, for year-over-year views
    pub fn yearly_snapshots(&self) -> Vec<&ScheduleEntry> {
        let last = self.schedule.len().saturating_sub(1);
        self.schedule
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % 12 == 0 || *idx == last)
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> AmortizationSummary {
        let principal_paid: f64 = self.schedule.iter().map(|e| e.principal_payment).sum();
        let final_balance = self.schedule.last().map(|e| e.remaining_balance).unwrap_or(0.0);

        let interest_share = if self.total_paid > 0.0 {
            self.total_interest_paid / self.total_paid
        } else {
            0.0
        };

        AmortizationSummary {
            total_months: self.actual_term_months,
            payoff_years: (self.actual_term_months as f64 / 12.0 * 10.0).round() / 10.0,
            monthly_payment: self.monthly_payment,
            total_monthly_payment: self.total_monthly_payment,
            principal_paid,
            total_interest_paid: self.total_interest_paid,
            total_taxes_paid: self.total_taxes_paid,
            total_insurance_paid: self.total_insurance_paid,
            total_paid: self.total_paid,
            interest_share,
            final_balance,
        }
    }

    /// Calendar date of a given payment month, counting `first_payment` as month 1
    pub fn payment_date(first_payment: NaiveDate, month: u32) -> Option<NaiveDate> {
        let offset = month.checked_sub(1)?;
        first_payment.checked_add_months(Months::new(offset))
    }

    /// Date of the final scheduled payment, if there is one
    pub fn payoff_date(&self, first_payment: NaiveDate) -> Option<NaiveDate> {
        Self::payment_date(first_payment, self.actual_term_months)
    }
}

/// Outcome of a schedule request
///
/// `Empty` is the normal "not enough information yet" state for inputs that
/// cannot describe a loan (no principal, no term, negative rate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Amortization {
    Computed(AmortizationResult),
    Empty,
}

impl Amortization {
    pub fn is_empty(&self) -> bool {
        matches!(self, Amortization::Empty)
    }

    pub fn as_result(&self) -> Option<&AmortizationResult> {
        match self {
            Amortization::Computed(result) => Some(result),
            Amortization::Empty => None,
        }
    }

    pub fn into_result(self) -> Option<AmortizationResult> {
        match self {
            Amortization::Computed(result) => Some(result),
            Amortization::Empty => None,
        }
    }

    /// Collapse to plain fields, using the all-zero result for `Empty`
    pub fn result_or_empty(self) -> AmortizationResult {
        self.into_result().unwrap_or_else(AmortizationResult::empty)
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub total_months: u32,
    /// Payoff time in years, rounded to one decimal
    pub payoff_years: f64,
    pub monthly_payment: f64,
    pub total_monthly_payment: f64,
    pub principal_paid: f64,
    pub total_interest_paid: f64,
    pub total_taxes_paid: f64,
    pub total_insurance_paid: f64,
    pub total_paid: f64,
    /// Fraction of everything paid that went to interest
    pub interest_share: f64,
    pub final_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: u32, balance: f64) -> ScheduleEntry {
        ScheduleEntry {
            month,
            principal_and_interest: 100.0,
            principal_payment: 100.0,
            interest_payment: 0.0,
            property_tax: 0.0,
            insurance: 0.0,
            total_payment: 100.0,
            remaining_balance: balance,
            total_interest_paid: 0.0,
            total_taxes_paid: 0.0,
            total_insurance_paid: 0.0,
        }
    }

    fn straight_line(months: u32) -> AmortizationResult {
        let schedule: Vec<_> = (1..=months)
            .map(|m| entry(m, 100.0 * (months - m) as f64))
            .collect();
        AmortizationResult {
            schedule,
            monthly_payment: 100.0,
            total_monthly_payment: 100.0,
            total_paid: 100.0 * months as f64,
            actual_term_months: months,
            ..AmortizationResult::empty()
        }
    }

    #[test]
    fn test_empty_result_is_all_zero() {
        let empty = AmortizationResult::empty();
        assert!(empty.schedule.is_empty());
        assert_eq!(empty.actual_term_months, 0);
        assert_eq!(empty.total_paid, 0.0);

        let summary = empty.summary();
        assert_eq!(summary.interest_share, 0.0);
        assert_eq!(summary.final_balance, 0.0);
        assert!(empty.yearly_snapshots().is_empty());
    }

    #[test]
    fn test_yearly_snapshots_include_last_month() {
        let result = straight_line(30);
        let months: Vec<u32> = result.yearly_snapshots().iter().map(|e| e.month).collect();
        assert_eq!(months, vec![1, 13, 25, 30]);

        // Last month on a year boundary is not duplicated
        let result = straight_line(25);
        let months: Vec<u32> = result.yearly_snapshots().iter().map(|e| e.month).collect();
        assert_eq!(months, vec![1, 13, 25]);
    }

    #[test]
    fn test_summary() {
        let summary = straight_line(30).summary();
        assert_eq!(summary.total_months, 30);
        assert_eq!(summary.payoff_years, 2.5);
        assert_eq!(summary.principal_paid, 3_000.0);
        assert_eq!(summary.final_balance, 0.0);
        assert_eq!(summary.interest_share, 0.0);
    }

    #[test]
    fn test_payment_dates() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(AmortizationResult::payment_date(first, 1), Some(first));
        // Month-end payments clamp to the shorter month
        assert_eq!(
            AmortizationResult::payment_date(first, 2),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(AmortizationResult::payment_date(first, 0), None);

        let result = straight_line(360);
        assert_eq!(result.payoff_date(first), NaiveDate::from_ymd_opt(2053, 12, 31));
        assert_eq!(AmortizationResult::empty().payoff_date(first), None);
    }

    #[test]
    fn test_amortization_accessors() {
        let computed = Amortization::Computed(straight_line(12));
        assert!(!computed.is_empty());
        assert_eq!(computed.as_result().map(|r| r.actual_term_months), Some(12));

        let empty = Amortization::Empty;
        assert!(empty.is_empty());
        assert!(empty.as_result().is_none());
        assert_eq!(empty.result_or_empty(), AmortizationResult::empty());
    }
}

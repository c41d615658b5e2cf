//! Running balance and cumulative totals for one amortization run

use crate::loan::MortgageInputs;

/// State of the loan after the most recent payment
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Months paid so far (0 before the first payment)
    pub month: u32,

    /// Outstanding principal
    pub balance: f64,

    /// Monthly interest rate
    pub monthly_rate: f64,

    pub total_interest_paid: f64,
    pub total_taxes_paid: f64,
    pub total_insurance_paid: f64,
}

/// Principal/interest split of a single payment
#[derive(Debug, Clone, Copy)]
pub struct PaymentSplit {
    pub principal: f64,
    pub interest: f64,
}

impl AmortizationState {
    /// Initialize state at loan origination
    pub fn from_inputs(inputs: &MortgageInputs) -> Self {
        Self {
            month: 0,
            balance: inputs.principal,
            monthly_rate: inputs.monthly_rate(),
            total_interest_paid: 0.0,
            total_taxes_paid: 0.0,
            total_insurance_paid: 0.0,
        }
    }

    /// Apply one month's payment and accumulate the running totals.
    ///
    /// A balance below `payoff_tolerance` afterwards is treated as paid off
    /// and set to exactly zero.
    pub fn apply_payment(
        &mut self,
        monthly_payment: f64,
        monthly_tax: f64,
        monthly_insurance: f64,
        payoff_tolerance: f64,
    ) -> PaymentSplit {
        self.month += 1;

        let interest = self.balance * self.monthly_rate;
        let principal = monthly_payment - interest;
        self.balance -= principal;

        self.total_interest_paid += interest;
        self.total_taxes_paid += monthly_tax;
        self.total_insurance_paid += monthly_insurance;

        if self.balance < payoff_tolerance {
            self.balance = 0.0;
        }

        PaymentSplit { principal, interest }
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance == 0.0
    }
}

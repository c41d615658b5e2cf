//! Mortgage input structures

use serde::{Deserialize, Serialize};

/// Upper bound applied to annual and property tax rates by `sanitized()`
pub const MAX_ANNUAL_RATE: f64 = 0.20;

/// Shortest term accepted by `sanitized()`
pub const MIN_TERM_YEARS: u32 = 1;

/// Longest term accepted by `sanitized()`
pub const MAX_TERM_YEARS: u32 = 50;

/// Longest term the engine will amortize; longer terms produce the empty result
pub const MAX_SCHEDULE_YEARS: u32 = 100;

/// Caller-supplied loan parameters for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageInputs {
    /// Loan amount (house price minus down payment)
    pub principal: f64,

    /// Annual interest rate as a fraction (0.065 = 6.5%)
    pub annual_rate: f64,

    /// Scheduled term in years
    pub term_years: u32,

    /// House price, used only to derive property tax
    #[serde(default)]
    pub house_price: f64,

    /// Annual property tax rate as a fraction of house price
    #[serde(default)]
    pub property_tax_rate: f64,

    /// Annual home insurance premium
    #[serde(default)]
    pub annual_insurance: f64,
}

impl MortgageInputs {
    pub fn new(
        principal: f64,
        annual_rate: f64,
        term_years: u32,
        house_price: f64,
        property_tax_rate: f64,
        annual_insurance: f64,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
            house_price,
            property_tax_rate,
            annual_insurance,
        }
    }

    /// Loan with no tax or insurance component
    pub fn loan_only(principal: f64, annual_rate: f64, term_years: u32) -> Self {
        Self::new(principal, annual_rate, term_years, 0.0, 0.0, 0.0)
    }

    /// Build inputs from a purchase: principal = house price - down payment
    pub fn from_purchase(
        house_price: f64,
        down_payment: f64,
        annual_rate: f64,
        term_years: u32,
        property_tax_rate: f64,
        annual_insurance: f64,
    ) -> Self {
        Self::new(
            house_price - down_payment,
            annual_rate,
            term_years,
            house_price,
            property_tax_rate,
            annual_insurance,
        )
    }

    /// Apply the input form's clamps: rates to [0, 20%], term to 1-50 years,
    /// money amounts floored at zero.
    pub fn sanitized(&self) -> Self {
        Self {
            principal: if self.principal.is_finite() { self.principal.max(0.0) } else { 0.0 },
            annual_rate: clamp_rate(self.annual_rate),
            term_years: self.term_years.clamp(MIN_TERM_YEARS, MAX_TERM_YEARS),
            house_price: cost_input(self.house_price),
            property_tax_rate: clamp_rate(self.property_tax_rate),
            annual_insurance: cost_input(self.annual_insurance),
        }
    }

    /// Whether these inputs produce a non-empty schedule
    pub fn is_computable(&self) -> bool {
        self.principal.is_finite()
            && self.principal > 0.0
            && self.annual_rate.is_finite()
            && self.annual_rate >= 0.0
            && self.term_years > 0
            && self.term_years <= MAX_SCHEDULE_YEARS
    }

    /// Nominal number of monthly payments
    pub fn scheduled_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Monthly property tax; absent or invalid values contribute zero
    pub fn monthly_tax(&self) -> f64 {
        cost_input(self.house_price) * cost_input(self.property_tax_rate) / 12.0
    }

    /// Monthly insurance; absent or invalid values contribute zero
    pub fn monthly_insurance(&self) -> f64 {
        cost_input(self.annual_insurance) / 12.0
    }
}

/// A labelled set of inputs, as loaded from a scenario file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageScenario {
    pub scenario_id: u32,
    pub down_payment: f64,
    pub inputs: MortgageInputs,
}

impl MortgageScenario {
    pub fn new(scenario_id: u32, down_payment: f64, inputs: MortgageInputs) -> Self {
        Self {
            scenario_id,
            down_payment,
            inputs,
        }
    }
}

fn cost_input(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_finite() {
        rate.clamp(0.0, MAX_ANNUAL_RATE)
    } else {
        0.0
    }
}

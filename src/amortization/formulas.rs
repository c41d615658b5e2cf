//! Closed-form annuity formulas
//!
//! With monthly rate `r = annual_rate / 12` and monthly multiplier `M = 1 + r`,
//! the balance after `t` payments of `Y` against principal `P` is
//! `P * M^t - Y * (M^t - 1) / (M - 1)`. The payment, remaining balance and
//! payoff time below all follow from that identity.
//!
//! Powers of `M` are taken as `exp(t * ln_1p(r))` so long terms neither wrap
//! an integer exponent nor overflow to `inf / inf`.

use crate::error::{MortgageError, Result};

/// Fixed monthly payment that retires `principal` over `term_years`.
///
/// Returns 0.0 when there is nothing to amortize (non-positive principal or
/// a zero-length term).
pub fn compute_monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let n = term_years.saturating_mul(12);
    if n == 0 || principal <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / n as f64;
    }

    // P * r / (1 - M^-N)
    let discount = -(-f64::from(n) * monthly_rate.ln_1p()).exp_m1();
    principal * monthly_rate / discount
}

/// Balance after `months_paid` payments of `monthly_payment`
pub fn compute_remaining_balance(
    principal: f64,
    annual_rate: f64,
    monthly_payment: f64,
    months_paid: u32,
) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal - monthly_payment * months_paid as f64;
    }

    let log_growth = f64::from(months_paid) * monthly_rate.ln_1p();
    principal * log_growth.exp() - monthly_payment * log_growth.exp_m1() / monthly_rate
}

/// Months needed to retire `principal` with a fixed `monthly_payment`.
///
/// Solves the balance identity for the `t` where the balance reaches zero:
/// `t = -ln(1 - P*r/Y) / ln(1 + r)`. The result is fractional; the last
/// payment of a real schedule is partial.
///
/// # Errors
/// * `PaymentBelowInterest` if the payment does not exceed the interest on
///   the opening balance, so the balance never falls
/// * `InvalidInput` for a non-positive payment or a negative or non-finite
///   principal or rate
pub fn compute_payoff_time_months(principal: f64, annual_rate: f64, monthly_payment: f64) -> Result<f64> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(MortgageError::invalid("principal", "must be a non-negative amount"));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return Err(MortgageError::invalid("annual_rate", "must be a non-negative rate"));
    }
    if !monthly_payment.is_finite() || monthly_payment <= 0.0 {
        return Err(MortgageError::invalid("monthly_payment", "must be positive"));
    }

    if principal == 0.0 {
        return Ok(0.0);
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return Ok(principal / monthly_payment);
    }

    let interest = principal * monthly_rate;
    if monthly_payment <= interest {
        return Err(MortgageError::PaymentBelowInterest {
            payment: monthly_payment,
            interest,
        });
    }

    Ok(-(1.0 - interest / monthly_payment).ln() / monthly_rate.ln_1p())
}

//! Error types for the mortgage engine
//!
//! Invalid loan inputs are not errors: the engine reports them as
//! `Amortization::Empty`. This enum covers the domain errors of the payoff
//! helper plus the I/O surfaces (CSV tables, JSON, zip lookups).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    /// The payment never reduces the balance at this rate
    #[error("payment of {payment:.2} does not exceed the first month's interest of {interest:.2}")]
    PaymentBelowInterest { payment: f64, interest: f64 },

    #[error("invalid zip code {0:?}: expected 5 digits")]
    InvalidZipCode(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;

//! Amortization engine for monthly mortgage schedules

mod state;
mod engine;
mod schedule;
pub mod formulas;
pub mod export;

pub use state::{AmortizationState, PaymentSplit};
pub use engine::{generate_schedule, AmortizationEngine, EngineConfig, DEFAULT_PAYOFF_TOLERANCE};
pub use schedule::{Amortization, AmortizationResult, AmortizationSummary, ScheduleEntry};
pub use formulas::{compute_monthly_payment, compute_payoff_time_months, compute_remaining_balance};
pub use export::write_schedule_csv;

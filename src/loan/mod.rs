//! Loan input structures and scenario loading

mod data;
pub mod loader;

pub use data::{MortgageInputs, MortgageScenario, MAX_ANNUAL_RATE, MAX_SCHEDULE_YEARS, MAX_TERM_YEARS, MIN_TERM_YEARS};
pub use loader::{load_scenarios, load_scenarios_from_reader, load_default_scenarios, DEFAULT_SCENARIOS_PATH};

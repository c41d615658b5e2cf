//! CSV export of amortization schedules

use std::io::Write;

use super::schedule::AmortizationResult;
use crate::error::Result;

/// Write one CSV row per schedule entry, with a snake_case header row
pub fn write_schedule_csv<W: Write>(writer: W, result: &AmortizationResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in &result.schedule {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}

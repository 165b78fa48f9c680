//! CSV export for completed day plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::plan::clock::HOURS_PER_DAY;
use crate::plan::planner::DayPlan;

/// Schema v1 column header for CSV plan export.
const HEADER: &str = "clock_hour,rate,used_power_w,devices";

/// Exports a day plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per clock hour in ascending
/// order. Produces deterministic output for identical plans.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &DayPlan, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, buf)
}

/// Writes a day plan as CSV to any writer.
///
/// Rows are keyed by clock hour; occupying device ids are joined with `;`
/// inside the last column. Hours without a defined rate leave the rate cell
/// empty.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &DayPlan, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // One row per clock hour
    for clock_hour in 0..HOURS_PER_DAY as u32 {
        let hour = plan.hours.to_internal(clock_hour);
        let occupancy = plan.occupancy.hour(hour);
        wtr.write_record(&[
            clock_hour.to_string(),
            plan.rates
                .get(hour)
                .map_or_else(String::new, |rate| format!("{rate:.4}")),
            format!("{:.1}", occupancy.used_power),
            occupancy.device_ids.join(";"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

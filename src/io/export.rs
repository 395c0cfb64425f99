//! CSV export for chart series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::types::Sweeps;

/// Column header for the chart CSV export.
const HEADER: &str = "index,wind_speed_ms,power_kw,blade_angle_deg,efficiency_rating";

/// Exports both chart series to a CSV file at the given path.
///
/// Writes a header row followed by one row per sample index. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(sweeps: &Sweeps, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(sweeps, buf)?;
    tracing::info!(path = %path.display(), rows = sweeps.power_vs_wind_speed.len(), "chart series exported");
    Ok(())
}

/// Writes both chart series as CSV to any writer.
///
/// Rows pair the wind-speed sweep and the blade-angle sweep by sample index.
/// If the series differ in length, the shorter one bounds the row count.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(sweeps: &Sweeps, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    let rows = sweeps
        .power_vs_wind_speed
        .points
        .iter()
        .zip(&sweeps.efficiency_vs_blade_angle.points);
    for (i, (&(wind, kw), &(angle, rating))) in rows.enumerate() {
        wtr.write_record(&[
            i.to_string(),
            format!("{wind:.4}"),
            format!("{kw:.4}"),
            format!("{angle:.4}"),
            format!("{rating:.4}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

//! Plain-text report writer.

use super::{ensure_parent_dir, validate_output_path};
use crate::aggregator::Interval;
use crate::utils::config::REPORT_HEADER;
use crate::utils::error::OutputError;
use log::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Render the report: the fixed header followed by one line per interval
pub fn render_report(intervals: &[Interval]) -> Vec<String> {
    std::iter::once(REPORT_HEADER.to_string())
        .chain(intervals.iter().map(Interval::to_string))
        .collect()
}

/// Write report lines joined with `\n` to a UTF-8 file
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent
///   cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(lines: &[String], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    validate_output_path(output_path)?;
    ensure_parent_dir(output_path)?;

    fs::write(output_path, lines.join("\n"))?;
    Ok(())
}

/// Write report lines to a stream, one per line, and flush
pub fn write_lines<W: Write>(lines: &[String], writer: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Stream the report, logging a failure instead of propagating it
///
/// Returns whether the write succeeded.
pub fn emit_report_to<W: Write>(lines: &[String], writer: &mut W) -> bool {
    match write_lines(lines, writer) {
        Ok(()) => true,
        Err(e) => {
            error!("Error writing report: {}", e);
            false
        }
    }
}

/// Write the report, logging the outcome instead of propagating it
///
/// Returns whether the write succeeded.
pub fn emit_report(lines: &[String], output_path: impl AsRef<Path>) -> bool {
    let output_path = output_path.as_ref();
    match write_report(lines, output_path) {
        Ok(()) => {
            info!("Report written to {}", output_path.display());
            true
        }
        Err(e) => {
            error!("Error writing report: {}", e);
            false
        }
    }
}

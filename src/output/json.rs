//! JSON report output writer.
//!
//! Writes the classified intervals together with the thresholds and
//! summary that produced them.

use super::{ensure_parent_dir, validate_output_path};
use crate::aggregator::{AggregatorStats, Interval, ReportSummary, Thresholds};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level JSON report document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    pub thresholds: Thresholds,
    pub summary: ReportSummary,
    pub stats: AggregatorStats,

    /// Intervals in report order
    pub intervals: Vec<Interval>,
}

/// Assemble a JSON report document
pub fn build_json_report(
    intervals: &[Interval],
    thresholds: &Thresholds,
    stats: AggregatorStats,
) -> JsonReport {
    JsonReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        thresholds: *thresholds,
        summary: ReportSummary::from_intervals(intervals),
        stats,
        intervals: intervals.to_vec(),
    }
}

/// Write a report to a pretty-printed JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_json_report(
    report: &JsonReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON report to: {}", output_path.display());

    validate_output_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a JSON report back from disk
pub fn read_json_report(input_path: impl AsRef<Path>) -> Result<JsonReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: JsonReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(report)
}

//! Report command implementation.
//!
//! The report command:
//! 1. Resolves thresholds
//! 2. Reads the log line by line
//! 3. Folds each line into the aggregator
//! 4. Finalizes and classifies intervals
//! 5. Writes output files

use super::models::ReportArgs;
use crate::aggregator::{AggregatorStats, EventAggregator, Interval, ReportSummary, Thresholds};
use crate::output::{
    build_json_report, emit_report, emit_report_to, render_report, write_json_report, write_lines,
};
use crate::utils::config::{load_config, resolve_thresholds};
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

/// Result of a report run
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub thresholds: Thresholds,
    pub intervals: Vec<Interval>,
    pub lines: Vec<String>,
    pub summary: ReportSummary,
    pub stats: AggregatorStats,
    /// `false` if the text report sink failed
    pub report_written: bool,
    /// `None` when no JSON report was requested
    pub json_written: Option<bool>,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Threshold config cannot be loaded or is invalid
/// * Input log cannot be opened or read
///
/// Failures writing the report are logged and reflected in
/// `ReportOutcome::report_written` / `json_written`; they do not fail the run.
pub fn execute_report(args: &ReportArgs) -> Result<ReportOutcome> {
    execute_report_to(args, &mut io::stdout())
}

/// Execute the report command with `stdout` as the console sink
///
/// `--stdout` reports and `--summary` counts are written to `stdout`; a
/// failing stream (e.g. a closed pipe) is logged, never a panic.
pub fn execute_report_to<W: Write>(args: &ReportArgs, stdout: &mut W) -> Result<ReportOutcome> {
    let start_time = Instant::now();

    let config = args
        .config
        .as_ref()
        .map(|path| {
            load_config(path).with_context(|| format!("Failed to load config {}", path.display()))
        })
        .transpose()?;
    let thresholds = resolve_thresholds(config.as_ref(), args.overrides)
        .context("Invalid threshold configuration")?;

    info!(
        "Thresholds: warning > {}s, error > {}s",
        thresholds.warning, thresholds.error
    );

    let mut aggregator = EventAggregator::new();
    if args.reads_stdin() {
        info!("Reading log from stdin");
        ingest_reader(&mut aggregator, io::stdin().lock()).context("Failed to read stdin")?;
    } else {
        info!("Reading log from {}", args.input.display());
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open log file {}", args.input.display()))?;
        ingest_reader(&mut aggregator, BufReader::new(file))
            .with_context(|| format!("Failed to read log file {}", args.input.display()))?;
    }

    let stats = aggregator.stats();
    debug!("Ingest stats: {:?}", stats);
    if stats.malformed_lines > 0 {
        warn!("Skipped {} malformed line(s)", stats.malformed_lines);
    }

    let intervals = aggregator.finalize(&thresholds);
    let summary = ReportSummary::from_intervals(&intervals);
    let lines = render_report(&intervals);

    let report_written = if args.to_stdout {
        emit_report_to(&lines, stdout)
    } else {
        emit_report(&lines, &args.output)
    };

    let json_written = args.output_json.as_ref().map(|json_path| {
        let json = build_json_report(&intervals, &thresholds, stats);
        match write_json_report(&json, json_path) {
            Ok(()) => {
                info!("JSON report written to {}", json_path.display());
                true
            }
            Err(e) => {
                error!("Error writing JSON report: {}", e);
                false
            }
        }
    });

    if args.print_summary {
        let summary_lines = [
            summary.summary(),
            format!("Overall: {}", summary.overall_status()),
        ];
        if let Err(e) = write_lines(&summary_lines, stdout) {
            error!("Error writing summary: {}", e);
        }
    }

    info!(
        "Processed {} lines into {} intervals in {:.2}s",
        stats.lines,
        intervals.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(ReportOutcome {
        thresholds,
        intervals,
        lines,
        summary,
        stats,
        report_written,
        json_written,
    })
}

/// Fold every line of a reader into the aggregator
///
/// Lines are taken in order (`\n` or `\r\n` terminated). Malformed lines,
/// including ones that are not valid UTF-8, are logged and skipped. Only
/// I/O errors from the reader abort.
pub fn ingest_reader<R: BufRead>(aggregator: &mut EventAggregator, mut reader: R) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        match std::str::from_utf8(&buf) {
            Ok(line) => {
                if let Err(e) = aggregator.ingest_line(line) {
                    warn!("Skipping line {}: {}", line_no, e);
                }
            }
            Err(e) => {
                aggregator.skip_undecodable_line();
                warn!("Skipping line {}: not valid UTF-8 ({})", line_no, e);
            }
        }
    }
    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.to_stdout && args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if !args.reads_stdin() && !args.to_stdout && args.input == args.output {
        anyhow::bail!("Output path must differ from input path");
    }

    Ok(())
}

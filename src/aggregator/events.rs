//! START/END pairing and interval construction.
//!
//! The aggregator keeps two mappings keyed by process identifier. Both are
//! last-write-wins. The start mapping preserves the position at which an
//! identifier was first inserted, which fixes the report order.

use super::classify::{classify, Status, Thresholds};
use crate::parser::{format_duration, parse_line, EventKind, LogEvent, Seconds};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Latest START seen for a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRecord {
    pub time: Option<Seconds>,
    pub description: String,
}

/// A matched START/END pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub process_id: String,
    pub description: String,
    /// `end - start`; `None` if either timestamp was invalid
    #[serde(rename = "duration_secs")]
    pub duration: Option<Seconds>,
    /// `None` exactly when `duration` is `None`
    pub status: Option<Status>,
}

impl Interval {
    /// Status label as printed in the report
    pub fn status_label(&self) -> &'static str {
        self.status.map(|s| s.label()).unwrap_or("INVALID")
    }

    /// Duration text as printed in the report
    pub fn duration_text(&self) -> String {
        match self.duration {
            Some(d) => format_duration(d),
            None => "invalid".to_string(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] PID {} | {} | Duration: {}",
            self.status_label(),
            self.process_id,
            self.description,
            self.duration_text()
        )
    }
}

/// Counters collected while folding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorStats {
    pub lines: usize,
    pub malformed_lines: usize,
    pub unknown_events: usize,
    pub start_events: usize,
    pub end_events: usize,
}

/// Accumulates START and END events and produces classified intervals
#[derive(Debug, Default)]
pub struct EventAggregator {
    starts: Vec<(String, StartRecord)>,
    start_index: HashMap<String, usize>,
    ends: HashMap<String, Option<Seconds>>,
    stats: AggregatorStats,
}

impl EventAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a START, replacing any earlier one for the same process
    pub fn fold_start(
        &mut self,
        process_id: impl Into<String>,
        time: Option<Seconds>,
        description: impl Into<String>,
    ) {
        let process_id = process_id.into();
        let record = StartRecord {
            time,
            description: description.into(),
        };
        self.stats.start_events += 1;

        let existing = self.start_index.get(&process_id).copied();
        match existing {
            Some(idx) => {
                debug!("Overwriting START for PID {}", process_id);
                self.starts[idx].1 = record;
            }
            None => {
                self.start_index.insert(process_id.clone(), self.starts.len());
                self.starts.push((process_id, record));
            }
        }
    }

    /// Record an END, replacing any earlier one for the same process
    pub fn fold_end(&mut self, process_id: impl Into<String>, time: Option<Seconds>) {
        self.stats.end_events += 1;
        if let Some(previous) = self.ends.insert(process_id.into(), time) {
            debug!("Overwriting END (was {:?})", previous);
        }
    }

    /// Fold one parsed event; returns `false` if the event kind was unknown
    pub fn fold(&mut self, event: LogEvent) -> bool {
        match event.kind {
            EventKind::Start => {
                self.fold_start(event.process_id, event.timestamp, event.description);
                true
            }
            EventKind::End => {
                self.fold_end(event.process_id, event.timestamp);
                true
            }
            EventKind::Unknown => {
                self.stats.unknown_events += 1;
                false
            }
        }
    }

    /// Parse and fold one raw line
    ///
    /// A malformed line is counted and returned as an error; the aggregator
    /// state is untouched so the caller can log it and carry on.
    pub fn ingest_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.stats.lines += 1;
        match parse_line(line) {
            Ok(event) => {
                self.fold(event);
                Ok(())
            }
            Err(e) => {
                self.stats.malformed_lines += 1;
                Err(e)
            }
        }
    }

    /// Count a line that could not be decoded as text
    pub fn skip_undecodable_line(&mut self) {
        self.stats.lines += 1;
        self.stats.malformed_lines += 1;
    }

    /// Ingest every line, skipping (and logging) malformed ones
    pub fn ingest_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            if let Err(e) = self.ingest_line(line) {
                warn!("Skipping malformed line {:?}: {}", line, e);
            }
        }
    }

    pub fn start_record(&self, process_id: &str) -> Option<&StartRecord> {
        self.start_index
            .get(process_id)
            .map(|&idx| &self.starts[idx].1)
    }

    /// Outer `None`: no END seen. Inner `None`: END had an invalid timestamp.
    pub fn end_time(&self, process_id: &str) -> Option<Option<Seconds>> {
        self.ends.get(process_id).copied()
    }

    pub fn start_count(&self) -> usize {
        self.starts.len()
    }

    pub fn end_count(&self) -> usize {
        self.ends.len()
    }

    pub fn stats(&self) -> AggregatorStats {
        self.stats
    }

    /// Join starts with ends and classify every matched interval
    ///
    /// Output follows start insertion order. Processes without an END are
    /// skipped, as are ENDs without a START.
    pub fn finalize(&self, thresholds: &Thresholds) -> Vec<Interval> {
        let intervals: Vec<Interval> = self
            .starts
            .iter()
            .filter_map(|(pid, start)| {
                let end = self.ends.get(pid)?;
                let duration = match (start.time, *end) {
                    (Some(s), Some(e)) => e.checked_sub(s),
                    _ => None,
                };
                if duration.is_none() {
                    warn!("PID {} has an invalid timestamp; duration unavailable", pid);
                }
                Some(Interval {
                    process_id: pid.clone(),
                    description: start.description.clone(),
                    duration,
                    status: duration.map(|d| classify(d, thresholds)),
                })
            })
            .collect();

        debug!(
            "Finalized {} intervals from {} starts and {} ends",
            intervals.len(),
            self.starts.len(),
            self.ends.len()
        );
        intervals
    }
}

/// Per-status counts over a set of intervals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub ok: usize,
    pub warning: usize,
    pub error: usize,
    pub invalid: usize,
}

impl ReportSummary {
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        let mut summary = Self {
            total: intervals.len(),
            ..Self::default()
        };
        for interval in intervals {
            match interval.status {
                Some(Status::Ok) => summary.ok += 1,
                Some(Status::Warning) => summary.warning += 1,
                Some(Status::Error) => summary.error += 1,
                None => summary.invalid += 1,
            }
        }
        summary
    }

    /// Worst status present; `Ok` for an empty report
    pub fn overall_status(&self) -> Status {
        if self.error > 0 {
            Status::Error
        } else if self.warning > 0 {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Intervals: {} | OK: {} | WARNING: {} | ERROR: {} | INVALID: {}",
            self.total, self.ok, self.warning, self.error, self.invalid
        )
    }
}

//! Aggregation of parsed events into classified intervals.
//!
//! This module transforms the stream of parsed log events into:
//! - Per-process START/END state (last write wins)
//! - Matched intervals with durations
//! - Severity classification against the configured thresholds

pub mod classify;
pub mod events;

// Re-export main types and functions
pub use classify::{classify, Status, Thresholds};
pub use events::{AggregatorStats, EventAggregator, Interval, ReportSummary, StartRecord};

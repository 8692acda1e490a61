//! Log line parsing.
//!
//! This module handles:
//! - Splitting a raw `timestamp,description,event,pid` line into fields
//! - Converting `HH:MM:SS` timestamps into seconds since midnight
//! - Formatting durations for the report

pub mod line;
pub mod time;

// Re-export main types
pub use line::{parse_line, EventKind, LogEvent};
pub use time::{format_duration, parse_time_to_seconds, Seconds};

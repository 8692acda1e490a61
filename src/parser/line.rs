//! Single-line parser for `timestamp,description,event,pid` records.

use super::time::{parse_time_to_seconds, Seconds};
use crate::utils::error::ParseError;
use log::debug;
use std::fmt;

/// Number of comma-separated fields in a well-formed line
const FIELD_COUNT: usize = 4;

/// Kind of a log event
///
/// Only the exact, case-sensitive tokens `START` and `END` are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    End,
    Unknown,
}

impl EventKind {
    /// Map a trimmed event token to its kind
    pub fn from_token(token: &str) -> Self {
        match token {
            "START" => EventKind::Start,
            "END" => EventKind::End,
            _ => EventKind::Unknown,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Start => "START",
            EventKind::End => "END",
            EventKind::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// One parsed log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Seconds since midnight; `None` when the timestamp was malformed
    pub timestamp: Option<Seconds>,
    pub description: String,
    pub kind: EventKind,
    /// Raw trimmed identifier; `"007"` and `"7"` are different processes
    pub process_id: String,
}

/// Parse one raw log line
///
/// **Public** - main entry point for parsing
///
/// The line is split on `,` and each field is trimmed. A malformed timestamp
/// does not fail the parse; it yields `timestamp: None`.
///
/// # Errors
/// * `ParseError::FieldCount` - The line does not have exactly four fields
///
/// # Example
/// ```
/// use log_interval_report::parser::{parse_line, EventKind};
///
/// let event = parse_line("11:35:23,scheduled task 032, START,37980").unwrap();
/// assert_eq!(event.kind, EventKind::Start);
/// assert_eq!(event.process_id, "37980");
/// ```
pub fn parse_line(raw: &str) -> Result<LogEvent, ParseError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        debug!("Rejecting line with {} fields: {:?}", fields.len(), raw);
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    }

    let [timestamp, description, kind, process_id] = [fields[0], fields[1], fields[2], fields[3]];

    Ok(LogEvent {
        timestamp: parse_time_to_seconds(timestamp),
        description: description.to_string(),
        kind: EventKind::from_token(kind),
        process_id: process_id.to_string(),
    })
}

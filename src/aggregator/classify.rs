//! Severity classification of interval durations.

use crate::parser::Seconds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a completed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Error,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Warning and error thresholds in seconds
///
/// `error > warning` is expected but not checked here; see
/// `utils::config::validate_thresholds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: Seconds,
    pub error: Seconds,
}

impl Thresholds {
    pub fn new(warning: Seconds, error: Seconds) -> Self {
        Self { warning, error }
    }
}

/// Classify a duration
///
/// Comparisons are strict: a duration equal to a threshold gets the lower
/// severity.
pub fn classify(duration: Seconds, thresholds: &Thresholds) -> Status {
    if duration > thresholds.error {
        Status::Error
    } else if duration > thresholds.warning {
        Status::Warning
    } else {
        Status::Ok
    }
}

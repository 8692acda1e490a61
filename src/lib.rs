//! Log Interval Report
//!
//! Reads a `timestamp,description,event,pid` log, pairs each process's
//! START and END records, and reports how long each one took, flagged
//! against warning and error thresholds.
//!
//! The core is two pieces used in order:
//!
//! - [`parser::parse_line`] turns one raw line into a [`parser::LogEvent`]
//! - [`aggregator::EventAggregator`] folds events and, once the input is
//!   exhausted, produces classified [`aggregator::Interval`]s
//!
//! ```
//! use log_interval_report::aggregator::{EventAggregator, Thresholds};
//!
//! let mut agg = EventAggregator::new();
//! agg.ingest_lines([
//!     "11:35:23,scheduled task 032, START,37980",
//!     "11:35:56,scheduled task 032, END,37980",
//! ]);
//! let intervals = agg.finalize(&Thresholds::new(30, 60));
//! assert_eq!(
//!     intervals[0].to_string(),
//!     "[WARNING] PID 37980 | scheduled task 032 | Duration: 33 00:00:33"
//! );
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

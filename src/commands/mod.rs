//! CLI command implementations.
//!
//! Commands orchestrate the parser, aggregator and output writers.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::ReportArgs;
pub use report::{execute_report, execute_report_to, ingest_reader, validate_args, ReportOutcome};
pub use utils::{display_config, display_version};

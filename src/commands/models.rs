use crate::utils::config::{ThresholdOverrides, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Log file to read; `-` reads stdin
    pub input: PathBuf,

    /// Text report destination
    pub output: PathBuf,

    /// Optional TOML threshold config
    pub config: Option<PathBuf>,

    /// Threshold overrides from CLI flags or environment
    pub overrides: ThresholdOverrides,

    /// Optional JSON report destination
    pub output_json: Option<PathBuf>,

    /// Print the report to stdout instead of writing `output`
    pub to_stdout: bool,

    /// Print per-status counts after the run
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            config: None,
            overrides: ThresholdOverrides::default(),
            output_json: None,
            to_stdout: false,
            print_summary: false,
        }
    }
}

impl ReportArgs {
    /// Whether input comes from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

//! Configuration and constants for the CLI.
//!
//! Thresholds come from three layers: built-in defaults, an optional TOML
//! file, and CLI/environment overrides. The loader is the only place that
//! checks `error_threshold > warning_threshold`.

use crate::aggregator::Thresholds;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// First line of every text report
pub const REPORT_HEADER: &str = "--- Log Report ---";

/// Default durations (seconds) above which an interval is flagged
pub const DEFAULT_WARNING_THRESHOLD: i64 = 300;
pub const DEFAULT_ERROR_THRESHOLD: i64 = 600;

pub const DEFAULT_INPUT_PATH: &str = "logs.log";
pub const DEFAULT_OUTPUT_PATH: &str = "log_report.txt";

/// Top-level layout of a threshold config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub thresholds: ThresholdSection,
}

/// `[thresholds]` table; absent keys fall back to the defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThresholdSection {
    pub warning_threshold: Option<i64>,
    pub error_threshold: Option<i64>,
}

/// Overrides supplied on the command line or through the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdOverrides {
    pub warning: Option<i64>,
    pub error: Option<i64>,
}

/// Parse a threshold config from TOML text
pub fn parse_config(contents: &str) -> Result<ConfigFile, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load a threshold config file from disk
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Toml` - If TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigFile, ConfigError> {
    let path = path.as_ref();
    debug!("Loading threshold config from: {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Merge defaults, an optional config file and overrides, then validate
///
/// **Public** - the single entry point commands use to obtain thresholds
pub fn resolve_thresholds(
    file: Option<&ConfigFile>,
    overrides: ThresholdOverrides,
) -> Result<Thresholds, ConfigError> {
    let section = file.map(|f| f.thresholds.clone()).unwrap_or_default();

    let warning = overrides
        .warning
        .or(section.warning_threshold)
        .unwrap_or(DEFAULT_WARNING_THRESHOLD);
    let error = overrides
        .error
        .or(section.error_threshold)
        .unwrap_or(DEFAULT_ERROR_THRESHOLD);

    let thresholds = Thresholds::new(warning, error);
    validate_thresholds(&thresholds)?;
    Ok(thresholds)
}

/// Check the ordering contract the classifier relies on
pub fn validate_thresholds(thresholds: &Thresholds) -> Result<(), ConfigError> {
    if thresholds.warning < 0 {
        return Err(ConfigError::NegativeThreshold {
            name: "WARNING_THRESHOLD",
            value: thresholds.warning,
        });
    }
    if thresholds.error < 0 {
        return Err(ConfigError::NegativeThreshold {
            name: "ERROR_THRESHOLD",
            value: thresholds.error,
        });
    }
    if thresholds.error <= thresholds.warning {
        return Err(ConfigError::InvalidThresholds {
            warning: thresholds.warning,
            error: thresholds.error,
        });
    }
    Ok(())
}

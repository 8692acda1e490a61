use crate::utils::config::{load_config, resolve_thresholds, ThresholdOverrides, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Display the effective thresholds after merging config and overrides
pub fn display_config(config: Option<&Path>, overrides: ThresholdOverrides) -> Result<()> {
    let file = config
        .map(|path| {
            load_config(path).with_context(|| format!("Failed to load config {}", path.display()))
        })
        .transpose()?;

    let thresholds =
        resolve_thresholds(file.as_ref(), overrides).context("Invalid threshold configuration")?;

    match config {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("  WARNING_THRESHOLD: {}s", thresholds.warning);
    println!("  ERROR_THRESHOLD:   {}s", thresholds.error);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Log Interval Report v{}", env!("CARGO_PKG_VERSION"));
    println!("JSON Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Pairs START/END process events and flags slow intervals.");
}

//! Log Interval Report CLI
//!
//! Pairs START/END process events from a log file and writes a report of
//! their durations, flagged against warning and error thresholds.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use log_interval_report::commands::{
    display_config, display_version, execute_report, validate_args, ReportArgs,
};
use log_interval_report::utils::config::{
    ThresholdOverrides, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};

/// Log Interval Report - duration report for START/END process logs
#[derive(Parser, Debug)]
#[command(name = "log-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Threshold flags shared by the commands
#[derive(clap::Args, Debug)]
struct ThresholdArgs {
    /// TOML file with a [thresholds] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds above which an interval is a WARNING
    #[arg(long = "warning", env = "WARNING_THRESHOLD")]
    warning: Option<i64>,

    /// Seconds above which an interval is an ERROR
    #[arg(long = "error", env = "ERROR_THRESHOLD")]
    error: Option<i64>,
}

impl ThresholdArgs {
    fn overrides(&self) -> ThresholdOverrides {
        ThresholdOverrides {
            warning: self.warning,
            error: self.error,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a log and write the duration report
    Report {
        /// Log file to read (`-` for stdin)
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Text report destination
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        /// Also write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print the report to stdout instead of writing the text file
        #[arg(long)]
        stdout: bool,

        /// Print per-status counts
        #[arg(long)]
        summary: bool,
    },

    /// Show the effective thresholds
    Config {
        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            output,
            thresholds,
            json,
            stdout,
            summary,
        } => {
            let args = ReportArgs {
                input,
                output,
                overrides: thresholds.overrides(),
                config: thresholds.config,
                output_json: json,
                to_stdout: stdout,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_report(&args)?;
        }

        Commands::Config { thresholds } => {
            display_config(thresholds.config.as_deref(), thresholds.overrides())?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

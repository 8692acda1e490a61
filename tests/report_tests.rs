use log_interval_report::aggregator::{Status, Thresholds};
use log_interval_report::commands::{execute_report, execute_report_to, ReportArgs};
use log_interval_report::output::read_json_report;
use log_interval_report::utils::config::ThresholdOverrides;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const LOG: &str = "\
11:35:23,scheduled task 032, START,37980
11:35:56,scheduled task 032, END,37980
11:36:00,background job 515, START,62922
11:38:30,background job 515, END,62922
11:40:00,quick task 100, START,100
11:40:05,quick task 100, END,100
11:41:00,never finished, START,999
";

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Console sink whose reader has gone away
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

fn args_for(dir: &Path) -> ReportArgs {
    ReportArgs {
        input: write_file(dir, "logs.log", LOG),
        output: dir.join("log_report.txt"),
        overrides: ThresholdOverrides {
            warning: Some(30),
            error: Some(60),
        },
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let args = args_for(dir.path());

    let outcome = execute_report(&args).unwrap();
    assert!(outcome.report_written);
    assert_eq!(outcome.json_written, None);

    let written = fs::read_to_string(&args.output).unwrap();
    assert_eq!(
        written,
        "--- Log Report ---\n\
         [WARNING] PID 37980 | scheduled task 032 | Duration: 33 00:00:33\n\
         [ERROR] PID 62922 | background job 515 | Duration: 150 00:02:30\n\
         [OK] PID 100 | quick task 100 | Duration: 5 00:00:05"
    );
    assert_eq!(outcome.summary.total, 3);
    assert_eq!(outcome.summary.overall_status(), Status::Error);
}

#[test]
fn test_thresholds_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "thresholds.toml",
        "[thresholds]\nwarning_threshold = 100\nerror_threshold = 200\n",
    );
    let args = ReportArgs {
        config: Some(config),
        overrides: ThresholdOverrides::default(),
        ..args_for(dir.path())
    };

    let outcome = execute_report(&args).unwrap();
    assert_eq!(outcome.thresholds, Thresholds::new(100, 200));

    let statuses: Vec<Option<Status>> = outcome.intervals.iter().map(|i| i.status).collect();
    assert_eq!(
        statuses,
        vec![Some(Status::Ok), Some(Status::Warning), Some(Status::Ok)]
    );
}

#[test]
fn test_invalid_thresholds_abort_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        overrides: ThresholdOverrides {
            warning: Some(60),
            error: Some(30),
        },
        ..args_for(dir.path())
    };

    assert!(execute_report(&args).is_err());
    assert!(!args.output.exists());
}

#[test]
fn test_sink_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("occupied");
    fs::create_dir(&out_dir).unwrap();
    let args = ReportArgs {
        output: out_dir,
        ..args_for(dir.path())
    };

    let outcome = execute_report(&args).unwrap();
    assert!(!outcome.report_written);
    assert_eq!(outcome.intervals.len(), 3);
}

#[test]
fn test_json_report_written() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("out/report.json");
    let args = ReportArgs {
        output_json: Some(json_path.clone()),
        ..args_for(dir.path())
    };

    let outcome = execute_report(&args).unwrap();
    assert_eq!(outcome.json_written, Some(true));

    let report = read_json_report(&json_path).unwrap();
    assert_eq!(report.intervals.len(), 3);
    assert_eq!(report.intervals[0].process_id, "37980");
    assert_eq!(report.summary.error, 1);
    assert_eq!(report.stats.lines, 7);
    assert_eq!(report.stats.start_events, 4);
}

#[test]
fn test_empty_log_yields_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        input: write_file(dir.path(), "empty.log", ""),
        ..args_for(dir.path())
    };

    let outcome = execute_report(&args).unwrap();
    assert_eq!(outcome.lines, vec!["--- Log Report ---".to_string()]);
    assert_eq!(fs::read_to_string(&args.output).unwrap(), "--- Log Report ---");
}

#[test]
fn test_json_sink_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        output_json: Some(dir.path().to_path_buf()),
        ..args_for(dir.path())
    };

    let outcome = execute_report(&args).unwrap();
    assert_eq!(outcome.json_written, Some(false));
    assert!(outcome.report_written);
}

#[test]
fn test_stdout_report_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        to_stdout: true,
        print_summary: true,
        ..args_for(dir.path())
    };

    let mut console = Vec::new();
    let outcome = execute_report_to(&args, &mut console).unwrap();

    assert!(outcome.report_written);
    assert!(!args.output.exists());
    assert_eq!(
        String::from_utf8(console).unwrap(),
        "--- Log Report ---\n\
         [WARNING] PID 37980 | scheduled task 032 | Duration: 33 00:00:33\n\
         [ERROR] PID 62922 | background job 515 | Duration: 150 00:02:30\n\
         [OK] PID 100 | quick task 100 | Duration: 5 00:00:05\n\
         Intervals: 3 | OK: 1 | WARNING: 1 | ERROR: 1 | INVALID: 0\n\
         Overall: ERROR\n"
    );
}

#[test]
fn test_summary_only_goes_to_console() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        print_summary: true,
        ..args_for(dir.path())
    };

    let mut console = Vec::new();
    let outcome = execute_report_to(&args, &mut console).unwrap();

    assert!(outcome.report_written);
    assert!(args.output.exists());
    assert_eq!(
        String::from_utf8(console).unwrap(),
        "Intervals: 3 | OK: 1 | WARNING: 1 | ERROR: 1 | INVALID: 0\nOverall: ERROR\n"
    );
}

#[test]
fn test_closed_stdout_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        to_stdout: true,
        print_summary: true,
        ..args_for(dir.path())
    };

    let outcome = execute_report_to(&args, &mut ClosedPipe).unwrap();
    assert!(!outcome.report_written);
    assert_eq!(outcome.intervals.len(), 3);
}

#[test]
fn test_non_utf8_line_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mixed.log");
    fs::write(
        &input,
        b"11:35:23,scheduled task 032, START,37980\n\
          11:35:30,bad \xff\xfe, START,2\n\
          11:35:56,scheduled task 032, END,37980\n",
    )
    .unwrap();
    let args = ReportArgs {
        input,
        ..args_for(dir.path())
    };

    let outcome = execute_report(&args).unwrap();
    assert_eq!(outcome.stats.lines, 3);
    assert_eq!(outcome.stats.malformed_lines, 1);
    assert_eq!(
        outcome.lines,
        vec![
            "--- Log Report ---".to_string(),
            "[WARNING] PID 37980 | scheduled task 032 | Duration: 33 00:00:33".to_string(),
        ]
    );
    assert!(outcome.report_written);
}

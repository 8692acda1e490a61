use log_interval_report::aggregator::{classify, EventAggregator, Status, Thresholds};
use pretty_assertions::assert_eq;

const THRESHOLDS: Thresholds = Thresholds {
    warning: 30,
    error: 60,
};

fn lines_of(agg: &EventAggregator) -> Vec<String> {
    agg.finalize(&THRESHOLDS)
        .iter()
        .map(|i| i.to_string())
        .collect()
}

#[test]
fn test_matched_pair_produces_one_line() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "11:35:23,scheduled task 032, START,37980",
        "11:35:56,scheduled task 032, END,37980",
    ]);

    assert_eq!(
        lines_of(&agg),
        vec!["[WARNING] PID 37980 | scheduled task 032 | Duration: 33 00:00:33".to_string()]
    );
}

#[test]
fn test_unmatched_events_are_silent() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:00,only start,START,1",
        "10:00:05,only end,END,2",
    ]);

    assert!(agg.finalize(&THRESHOLDS).is_empty());
}

#[test]
fn test_later_start_wins() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:00,first run,START,5",
        "10:00:50,second run,START,5",
        "10:01:00,done,END,5",
    ]);

    let intervals = agg.finalize(&THRESHOLDS);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].description, "second run");
    assert_eq!(intervals[0].duration, Some(10));
    assert_eq!(intervals[0].status, Some(Status::Ok));
}

#[test]
fn test_later_end_wins() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:00,job,START,5",
        "10:00:10,job,END,5",
        "10:02:00,job,END,5",
    ]);

    let intervals = agg.finalize(&THRESHOLDS);
    assert_eq!(intervals[0].duration, Some(120));
    assert_eq!(intervals[0].status, Some(Status::Error));
}

#[test]
fn test_report_follows_start_insertion_order() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:00,c,START,300",
        "10:00:00,a,START,100",
        "10:00:00,b,START,200",
        "10:00:01,b,END,200",
        "10:00:01,a,END,100",
        "10:00:01,c,END,300",
        // restarting 300 keeps its first slot
        "10:00:02,c again,START,300",
        "10:00:03,c again,END,300",
    ]);

    let pids: Vec<String> = agg
        .finalize(&THRESHOLDS)
        .into_iter()
        .map(|i| i.process_id)
        .collect();
    assert_eq!(pids, vec!["300", "100", "200"]);
}

#[test]
fn test_distinct_textual_ids() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:00,x,START,007",
        "10:00:10,x,END,7",
    ]);

    assert!(agg.finalize(&THRESHOLDS).is_empty());
}

#[test]
fn test_negative_duration_classified_numerically() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:30,backwards,START,1",
        "10:00:00,backwards,END,1",
    ]);

    assert_eq!(
        lines_of(&agg),
        vec!["[OK] PID 1 | backwards | Duration: -30 00:00:30".to_string()]
    );
}

#[test]
fn test_invalid_timestamp_never_classified() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "2025-04-09 10:00:00, Event Start, START, 123",
        "2025-04-09 10:05:00, Event End, END, 123",
    ]);

    assert_eq!(agg.start_count(), 1);
    assert_eq!(agg.end_count(), 1);

    let intervals = agg.finalize(&THRESHOLDS);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].status, None);
    assert_eq!(
        intervals[0].to_string(),
        "[INVALID] PID 123 | Event Start | Duration: invalid"
    );
}

#[test]
fn test_malformed_lines_do_not_stop_ingest() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines([
        "10:00:00,job,START,1",
        "this line is garbage",
        "10:00:00,too,many,fields,here",
        "10:00:05,job,END,1",
    ]);

    let stats = agg.stats();
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.malformed_lines, 2);
    assert_eq!(agg.finalize(&THRESHOLDS).len(), 1);
}

#[test]
fn test_finalize_is_repeatable_and_early() {
    let mut agg = EventAggregator::new();
    agg.ingest_lines(["10:00:00,job,START,1"]);
    assert!(agg.finalize(&THRESHOLDS).is_empty());

    agg.ingest_lines(["10:00:40,job,END,1"]);
    let first = agg.finalize(&THRESHOLDS);
    let second = agg.finalize(&THRESHOLDS);
    assert_eq!(first, second);
    assert_eq!(first[0].status, Some(Status::Warning));
}

#[test]
fn test_classify_thresholds_exclusive() {
    assert_eq!(classify(30, &THRESHOLDS), Status::Ok);
    assert_eq!(classify(31, &THRESHOLDS), Status::Warning);
    assert_eq!(classify(60, &THRESHOLDS), Status::Warning);
    assert_eq!(classify(61, &THRESHOLDS), Status::Error);
}

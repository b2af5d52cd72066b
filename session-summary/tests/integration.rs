//! Integration tests for session-summary.
//!
//! These tests load sessions and configuration the way the binary does and
//! check the rendered report end to end.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use session_summary::{
    generate_report, Attempt, Category, Config, Penalty, Reporter, Session, Solve,
    SummaryReporter, Timing,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

fn attempt(start: NaiveDateTime, elapsed_ms: i64, scramble: &str) -> Attempt {
    let timing = Timing::new(start, start + Duration::milliseconds(elapsed_ms));
    Attempt::new(
        Solve::new(timing),
        scramble.split_whitespace().map(str::to_string).collect(),
    )
}

/// The five-solve 3x3x3 session, most recent first.
fn five_solves() -> Vec<Attempt> {
    vec![
        attempt(at(14, 4, 0), 12_340, "R U R' U'"),
        attempt(at(14, 3, 0), 11_000, "F2 L D'"),
        attempt(at(14, 2, 0), 15_500, "B U2"),
        attempt(at(14, 1, 0), 10_200, "L' F R2"),
        attempt(at(14, 0, 0), 13_000, "D R U"),
    ]
}

#[test]
fn test_full_report() {
    let report = generate_report(&Category::new("3x3x3"), &five_solves());

    let expected = "\
3x3x3
Mar 14, 2026 2:00:00 PM - 2:04:12 PM

Mean:               12.41
Standard deviation:  2.05
Best Time:          10.20
Worst Time:         15.50

Best average of 5: 12.11
  1-5 - 13.00 (10.20) (15.50) 11.00 12.34

1. 13.00  D R U
2. 10.20  L' F R2
3. 15.50  B U2
4. 11.00  F2 L D'
5. 12.34  R U R' U'
";
    assert_eq!(report, expected);
}

#[test]
fn test_empty_session() {
    let report = generate_report(&Category::new("Megaminx"), &[]);
    assert_eq!(report, "Megaminx\n");
}

#[test]
fn test_report_is_byte_identical_across_calls() {
    let attempts = five_solves();
    let category = Category::new("3x3x3");
    let reporter = SummaryReporter::default();

    assert_eq!(
        reporter.render(&category, &attempts),
        reporter.render(&category, &attempts)
    );
}

#[test]
fn test_span_ordering() {
    let attempts = five_solves();
    let report = generate_report(&Category::new("3x3x3"), &attempts);
    let span = report.lines().nth(1).unwrap();

    let earliest_start = attempts.last().unwrap().solve.timing.start;
    let latest_end = attempts.first().unwrap().solve.timing.end;
    assert_eq!(
        span,
        format!(
            "{} - {}",
            earliest_start.format("%b %-d, %Y %-I:%M:%S %p"),
            latest_end.format("%-I:%M:%S %p")
        )
    );
}

#[test]
fn test_penalties_in_listing() {
    let mut attempts = five_solves();
    attempts[0].solve.penalty = Penalty::PlusTwo;
    attempts[4].solve.penalty = Penalty::Dnf;

    let report = generate_report(&Category::new("3x3x3"), &attempts);

    assert!(report.contains("1.   DNF  D R U\n"));
    assert!(report.ends_with("5. 14.34  R U R' U'\n"));
    // The DNF is the discarded worst time; 15.50 is kept.
    assert!(report.contains("  1-5 - (DNF) (10.20) 15.50 11.00 14.34\n"));
}

#[test]
fn test_session_file_to_report() {
    let json = r#"{
        "category": { "description": "2x2x2" },
        "attempts": [
            { "solve": { "timing": { "start": "2026-03-14T08:00:00", "end": "2026-03-14T08:00:03.500" } }, "scramble": ["R", "U2"] },
            { "solve": { "timing": { "start": "2026-03-14T08:01:00", "end": "2026-03-14T08:01:04.250" }, "penalty": "plus_two" }, "scramble": ["F"] },
            { "solve": { "timing": { "start": "2026-03-14T08:02:00", "end": "2026-03-14T08:02:05" } }, "scramble": [] }
        ]
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    // The file lists attempts oldest first.
    let session = Session::load(file.path())
        .unwrap()
        .into_most_recent_first();
    let report = generate_report(&session.category, &session.attempts);

    assert!(report.starts_with("2x2x2\nMar 14, 2026 8:00:00 AM - 8:02:05 AM\n\n"));
    assert!(report.contains("1. 3.50  R U2\n"));
    assert!(report.contains("2. 6.25  F\n"));
    assert!(report.ends_with("3. 5.00  \n"));
    assert!(!report.contains("Best average"));
}

#[test]
fn test_config_file_drives_report() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[report]
window_sizes = [3]
date_time_format = "%Y-%m-%d %H:%M:%S"
time_format = "%H:%M:%S"
"#,
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let reporter = SummaryReporter::new(config.report).unwrap();
    let report = reporter.render(&Category::new("3x3x3"), &five_solves());

    assert!(report.contains("2026-03-14 14:00:00 - 14:04:12\n"));
    // Windows of 3, most recent first: [12.34, 11.00, 15.50] averages 12.34,
    // [11.00, 15.50, 10.20] averages 11.00, [15.50, 10.20, 13.00] averages 13.00.
    assert!(report.contains("Best average of 3: 11.00\n  2-4 - (10.20) (15.50) 11.00\n"));
    assert!(!report.contains("Best average of 5"));
}

#[test]
fn test_history_depth_limits_statistics() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[report]\nhistory_depth = 2\nwindow_sizes = []\n")
        .unwrap();

    let config = Config::load(file.path()).unwrap();
    let reporter = SummaryReporter::new(config.report).unwrap();
    let report = reporter.render(&Category::new("3x3x3"), &five_solves());

    // Only 12.34 and 11.00 are considered.
    assert!(report.contains("Best Time:          11.00\n"));
    assert!(report.contains("Worst Time:         12.34\n"));
    // The listing still shows every solve.
    assert!(report.contains("1. 13.00  D R U\n"));
}

#[test]
fn test_history_depth_smaller_than_window_omits_best_average() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[report]\nhistory_depth = 2\nwindow_sizes = [3]\n")
        .unwrap();

    let config = Config::load(file.path()).unwrap();
    let reporter = SummaryReporter::new(config.report).unwrap();
    let report = reporter.render(&Category::new("3x3x3"), &five_solves());

    assert!(!report.contains("Best average of 3"));
    assert!(report.contains("Best Time:          11.00\n"));
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[report]\nwindow_sizes = [5, 5]\n").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(SummaryReporter::new(config.report).is_err());
}

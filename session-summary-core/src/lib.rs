//! Core types and report assembly for session-summary.
//!
//! This crate turns a most-recent-first sequence of timed puzzle attempts
//! into a plain-text session summary: aggregate statistics, best trimmed
//! averages with their discarded times marked, and the full solve listing.

pub mod format;
pub mod report;
pub mod solve;
pub mod stats;

// Re-export main types for convenience
pub use format::format_seconds;
pub use report::{generate_report, ReportConfig, ReportError, Reporter, SummaryReporter};
pub use solve::{Attempt, Category, Penalty, RealTime, Solve, Timing};
pub use stats::{
    find_extremes, Best, BestAverage, Mean, Measurement, StandardDeviation, StatisticalMeasure,
    WindowExtremes, Worst,
};

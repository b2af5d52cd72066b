//! session-summary: statistical summaries of timed puzzle solving sessions
//!
//! This library loads a session file and its configuration and hands the
//! attempts to the core report assembler.

pub mod cli;
pub mod config;
pub mod session;

// Re-export core types for convenience
pub use session_summary_core::format::format_seconds;
pub use session_summary_core::report::{
    generate_report, ReportConfig, ReportError, Reporter, SummaryReporter,
};
pub use session_summary_core::solve::{Attempt, Category, Penalty, RealTime, Solve, Timing};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::{Config, DisplayConfig};
pub use session::Session;

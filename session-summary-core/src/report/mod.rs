use std::collections::HashSet;
use std::io::Write;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solve::{Attempt, Category};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),
}

/// Layout and statistics settings for a session summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Best-average window sizes, in the order their blocks are rendered.
    pub window_sizes: Vec<usize>,
    /// Width of the label column in the statistics block.
    pub label_width: usize,
    /// How many of the most recent solves the statistics consider (unbounded if unset).
    pub history_depth: Option<usize>,
    /// chrono format string for the start of the session span.
    pub date_time_format: String,
    /// chrono format string for the end of the session span.
    pub time_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_sizes: vec![5, 12],
            label_width: 19,
            history_depth: None,
            date_time_format: "%b %-d, %Y %-I:%M:%S %p".to_string(),
            time_format: "%-I:%M:%S %p".to_string(),
        }
    }
}

impl ReportConfig {
    /// Check that the configuration can render a report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] for window sizes below 3 or
    /// repeated, a zero label width or history depth, or a malformed date
    /// format.
    pub fn validate(&self) -> Result<(), ReportError> {
        let mut seen = HashSet::new();
        for &size in &self.window_sizes {
            if size < 3 {
                return Err(ReportError::InvalidConfig(format!(
                    "window size {} is below 3",
                    size
                )));
            }
            if !seen.insert(size) {
                return Err(ReportError::InvalidConfig(format!(
                    "window size {} is listed twice",
                    size
                )));
            }
        }

        if self.label_width == 0 {
            return Err(ReportError::InvalidConfig(
                "label_width must be positive".to_string(),
            ));
        }

        if let Some(depth) = self.history_depth {
            if depth == 0 {
                return Err(ReportError::InvalidConfig(
                    "history_depth must be positive".to_string(),
                ));
            }
        }

        for format in [&self.date_time_format, &self.time_format] {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(ReportError::InvalidConfig(format!(
                    "malformed date format '{}'",
                    format
                )));
            }
        }

        Ok(())
    }

    /// History depth handed to each statistical measure.
    pub fn max_history_depth(&self) -> usize {
        self.history_depth.unwrap_or(usize::MAX)
    }
}

pub trait Reporter: Send + Sync {
    /// Render the report for a most-recent-first attempt sequence.
    fn render(&self, category: &Category, attempts: &[Attempt]) -> String;

    fn write_report(
        &self,
        writer: &mut dyn Write,
        category: &Category,
        attempts: &[Attempt],
    ) -> Result<(), ReportError> {
        writer.write_all(self.render(category, attempts).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

mod summary;
pub use summary::{generate_report, SummaryReporter};

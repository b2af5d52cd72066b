//! Command-line interface for session-summary.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "session-summary")]
#[command(about = "Render a statistical summary of a timed puzzle solving session")]
#[command(version)]
pub struct Cli {
    /// Session file (JSON) with a category and its attempts
    pub session: PathBuf,

    /// Path to config file (defaults to .session-summary.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Best average window size (repeatable, replaces the configured sizes)
    #[arg(short, long = "window")]
    pub windows: Vec<usize>,

    /// Only consider this many of the most recent solves for statistics
    #[arg(long)]
    pub history_depth: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Attempts in the session file are listed oldest first
    #[arg(long)]
    pub oldest_first: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    /// Only values given on the command line override the config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if !self.windows.is_empty() {
            config.report.window_sizes = self.windows.clone();
        }

        if let Some(history_depth) = self.history_depth {
            config.report.history_depth = Some(history_depth);
        }

        if self.no_color {
            config.display.use_colors = false;
        }
    }
}

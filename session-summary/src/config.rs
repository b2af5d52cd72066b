//! Configuration loading for session-summary.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use session_summary_core::ReportConfig;
use std::path::Path;

/// Top-level configuration for session-summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the report layout and statistics.
    pub report: ReportConfig,
    /// Settings for terminal output.
    pub display: DisplayConfig,
}

/// Configuration for terminal output around the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Whether to use colors in terminal output.
    pub use_colors: bool,
    /// Whether to print a title line above the report on stdout.
    pub show_title: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_title: true,
        }
    }
}

/// Default configuration file name.
const DEFAULT_CONFIG_FILE: &str = ".session-summary.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the default config file if it exists, otherwise use defaults.
    ///
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or try the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the specified file cannot be read or parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_or_default(),
        }
    }
}

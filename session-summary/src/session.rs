//! Session files: a category and its attempts, stored as JSON.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use session_summary_core::{Attempt, Category};
use std::path::Path;

/// A category together with its attempts, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub category: Category,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl Session {
    /// Load a session from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// category has no description.
    pub fn load(path: &Path) -> Result<Session> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to load session file: {}", path.display()))
    }

    /// Parse a session from JSON text.
    pub fn from_json(content: &str) -> Result<Session> {
        let session: Session =
            serde_json::from_str(content).context("Failed to parse session JSON")?;

        if session.category.description.trim().is_empty() {
            bail!("Session category has an empty description");
        }

        Ok(session)
    }

    /// Reverse a session whose attempts were stored oldest first.
    pub fn into_most_recent_first(mut self) -> Session {
        self.attempts.reverse();
        self
    }

    /// Title shown above the report.
    pub fn title(&self) -> String {
        format!("Session Summary - {}", self.category.description)
    }
}

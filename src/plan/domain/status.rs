//! Task status vocabulary and its derivation rule.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived execution status of an imported task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work has started but has not reached completion.
    InProgress,
    /// Completion has reached 100 percent.
    Completed,
    /// Declared for downstream writers; never produced by derivation.
    Blocked,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }

    /// Derives a status from the raw completion fields.
    ///
    /// Precedence is fixed: a completion percentage of at least 100 wins,
    /// then the presence of an actual-start marker, then [`Self::Todo`].
    #[must_use]
    pub fn derive(percent_complete: Option<f64>, has_actual_start: bool) -> Self {
        if percent_complete.is_some_and(|pct| pct >= 100.0) {
            Self::Completed
        } else if has_actual_start {
            Self::InProgress
        } else {
            Self::Todo
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

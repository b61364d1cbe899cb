//! Task priority buckets and score thresholds.

use super::ParseTaskPriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority bucket derived from the document's numeric priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Score below 500.
    Low,
    /// Score in 500..700, and the default when no score is present.
    Medium,
    /// Score in 700..900.
    High,
    /// Score of 900 or above.
    Urgent,
}

impl TaskPriority {
    /// Buckets a raw priority score by threshold.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score >= 900 {
            Self::Urgent
        } else if score >= 700 {
            Self::High
        } else if score >= 500 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Derives a priority from an optional raw score.
    ///
    /// An absent score yields [`Self::Medium`], not the lowest bucket.
    #[must_use]
    pub fn derive(score: Option<i32>) -> Self {
        score.map_or(Self::Medium, Self::from_score)
    }

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

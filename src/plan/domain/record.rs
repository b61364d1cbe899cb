//! Flat output records and their JSON wire contract.
//!
//! Field names follow the established API shape: camelCase keys, date-times
//! rendered as `yyyy-MM-ddTHH:mm:ss` with no offset, and absent values
//! serialized as explicit nulls.

use super::{TaskPriority, TaskStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Serde adapter for optional wire date-times.
pub mod wire_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Wire pattern shared with the upstream API contract.
    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Serializes an optional date-time as the wire pattern, or null.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(datetime) => serializer.collect_str(&datetime.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes the wire pattern, treating null or absence as unset.
    ///
    /// # Errors
    ///
    /// Fails when the value is present but does not match the pattern.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}

/// One flattened task in the output sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task name as it appears in the document. Never blank.
    pub name: String,
    /// Free-form notes carried over from the document.
    pub description: Option<String>,
    /// Scheduled start, local-zone, offset-free.
    #[serde(default, rename = "startDate", with = "wire_datetime")]
    pub start: Option<NaiveDateTime>,
    /// Scheduled finish, local-zone, offset-free.
    #[serde(default, rename = "finishDate", with = "wire_datetime")]
    pub finish: Option<NaiveDateTime>,
    /// Duration converted from the document's native units to days.
    #[serde(rename = "duration")]
    pub duration_days: Option<f64>,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    /// Derived execution status.
    pub status: TaskStatus,
    /// Derived priority bucket.
    pub priority: TaskPriority,
    /// Zero-based position in document traversal order over valid tasks.
    pub order: i32,
    /// Indentation depth in the source document, 1 at the top level.
    pub outline_level: i32,
    /// Name of the structural parent, when one resolved.
    #[serde(rename = "parentTaskName")]
    pub parent_name: Option<String>,
    /// `order` of the structural parent, when one resolved.
    pub parent_order: Option<i32>,
}

/// The assembled response record for one imported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Project title, or the source file's stem when the title is blank.
    pub name: String,
    /// Project-level start, local-zone, offset-free.
    #[serde(default, rename = "startDate", with = "wire_datetime")]
    pub start: Option<NaiveDateTime>,
    /// Project-level finish, local-zone, offset-free.
    #[serde(default, rename = "finishDate", with = "wire_datetime")]
    pub finish: Option<NaiveDateTime>,
    /// Flattened tasks in assigned order.
    pub tasks: Vec<TaskRecord>,
}

//! Per-task field derivation.
//!
//! Each derivation is a pure function of the raw task: duration converts
//! through the native units-per-day factor, progress truncates the
//! completion percentage into 0..=100, and status/priority apply the
//! precedence rules owned by the domain enums.

use super::linker::LinkedTask;
use crate::plan::domain::{TaskPriority, TaskRecord, TaskStatus};
use crate::plan::ports::RawDuration;
use chrono::TimeZone;

/// Default outline level for tasks that do not declare one.
const ROOT_OUTLINE_LEVEL: i32 = 1;

/// Builds the output record for one linked task.
pub(crate) fn derive_record<Tz: TimeZone>(linked: &LinkedTask<'_>, zone: &Tz) -> TaskRecord {
    let task = linked.task;

    TaskRecord {
        name: linked.name.to_owned(),
        description: task.notes().map(str::to_owned),
        start: task.start().map(|value| value.resolve_in(zone)),
        finish: task.finish().map(|value| value.resolve_in(zone)),
        duration_days: task.duration().map(RawDuration::in_days),
        progress: derive_progress(task.percent_complete()),
        status: TaskStatus::derive(task.percent_complete(), task.actual_start().is_some()),
        priority: TaskPriority::derive(task.priority_score()),
        order: linked.order,
        outline_level: task.outline_level().unwrap_or(ROOT_OUTLINE_LEVEL),
        parent_name: linked.parent_name.clone(),
        parent_order: linked.parent_order,
    }
}

/// Truncates the completion percentage into 0..=100; absent means 0.
fn derive_progress(percent_complete: Option<f64>) -> i32 {
    percent_complete.map_or(0, |pct| {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the value is clamped to 0..=100 before the truncating cast"
        )]
        let truncated = pct.clamp(0.0, 100.0) as i32;
        truncated
    })
}

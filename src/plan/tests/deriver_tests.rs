//! Field-derivation behaviour for single tasks.

use crate::plan::domain::{TaskPriority, TaskRecord, TaskStatus};
use crate::plan::ports::{RawDateTime, RawDuration, RawProject, RawTask};
use crate::plan::services::{transform, transform_in_zone};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rstest::rstest;

fn single_record(task: RawTask) -> TaskRecord {
    let mut project = RawProject::new();
    project.push_task(task);
    transform(&project, "plan.mpp")
        .tasks
        .into_iter()
        .next()
        .expect("one derived record")
}

fn structured(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid fixture date")
}

#[rstest]
fn duration_converts_milliseconds_to_days() {
    let task = RawTask::named("Pour foundation")
        .with_duration(RawDuration::from_milliseconds(216_000_000.0));

    let record = single_record(task);

    assert_eq!(record.duration_days, Some(2.5));
}

#[rstest]
fn duration_honours_custom_units_per_day() {
    let task = RawTask::named("Cure concrete").with_duration(RawDuration::new(48.0, 24.0));

    let record = single_record(task);

    assert_eq!(record.duration_days, Some(2.0));
}

#[rstest]
fn missing_duration_stays_unset() {
    let record = single_record(RawTask::named("Unscheduled"));

    assert_eq!(record.duration_days, None);
}

#[rstest]
#[case(Some(40.9), 40)]
#[case(Some(150.0), 100)]
#[case(Some(-5.0), 0)]
#[case(None, 0)]
fn progress_truncates_and_clamps_into_percent_range(
    #[case] percent_complete: Option<f64>,
    #[case] expected: i32,
) {
    let mut task = RawTask::named("Install fixtures");
    if let Some(pct) = percent_complete {
        task = task.with_percent_complete(pct);
    }

    let record = single_record(task);

    assert_eq!(record.progress, expected);
}

#[rstest]
fn completed_status_wins_over_actual_start() {
    let task = RawTask::named("Sign-off")
        .with_percent_complete(100.0)
        .with_actual_start(RawDateTime::Structured(structured(2024, 5, 2, 9)));

    let record = single_record(task);

    assert_eq!(record.status, TaskStatus::Completed);
    assert_eq!(record.progress, 100);
}

#[rstest]
fn actual_start_marks_partial_work_in_progress() {
    let task = RawTask::named("Wiring")
        .with_percent_complete(40.0)
        .with_actual_start(RawDateTime::Structured(structured(2024, 5, 2, 9)));

    let record = single_record(task);

    assert_eq!(record.status, TaskStatus::InProgress);
}

#[rstest]
fn untouched_tasks_stay_todo() {
    let record = single_record(RawTask::named("Painting").with_percent_complete(0.0));

    assert_eq!(record.status, TaskStatus::Todo);
}

#[rstest]
#[case(Some(950), TaskPriority::Urgent)]
#[case(Some(750), TaskPriority::High)]
#[case(Some(550), TaskPriority::Medium)]
#[case(Some(200), TaskPriority::Low)]
#[case(None, TaskPriority::Medium)]
fn priority_scores_bucket_into_the_wire_vocabulary(
    #[case] score: Option<i32>,
    #[case] expected: TaskPriority,
) {
    let mut task = RawTask::named("Inspection");
    if let Some(value) = score {
        task = task.with_priority_score(value);
    }

    let record = single_record(task);

    assert_eq!(record.priority, expected);
}

#[rstest]
fn notes_become_the_description() {
    let record = single_record(RawTask::named("Handover").with_notes("bring both key sets"));

    assert_eq!(record.description.as_deref(), Some("bring both key sets"));
}

#[rstest]
fn outline_level_defaults_to_root() {
    let record = single_record(RawTask::named("Top-level"));

    assert_eq!(record.outline_level, 1);
}

#[rstest]
fn structured_dates_pass_through_unchanged() {
    let start = structured(2024, 4, 1, 8);
    let finish = structured(2024, 4, 5, 17);
    let task = RawTask::named("Framing")
        .with_start(RawDateTime::Structured(start))
        .with_finish(RawDateTime::Structured(finish));

    let record = single_record(task);

    assert_eq!(record.start, Some(start));
    assert_eq!(record.finish, Some(finish));
}

#[rstest]
fn calendar_timestamps_resolve_in_the_injected_zone() {
    let instant = Utc
        .with_ymd_and_hms(2024, 3, 1, 6, 30, 0)
        .single()
        .expect("valid fixture instant");
    let zone = FixedOffset::east_opt(2 * 3600).expect("valid fixture offset");

    let mut project = RawProject::new();
    project.push_task(RawTask::named("Kickoff").with_start(RawDateTime::Timestamp(instant)));

    let record = transform_in_zone(&project, "plan.mpp", &zone);

    let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|date| date.and_hms_opt(8, 30, 0))
        .expect("valid expected date");
    let task = record.tasks.first().expect("kickoff record");
    assert_eq!(task.start, Some(expected));
}

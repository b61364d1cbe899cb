//! Project-summary behaviour: naming fallback and header dates.

use crate::plan::ports::{RawDateTime, RawProject};
use crate::plan::services::{transform, transform_in_zone};
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use rstest::rstest;

#[rstest]
fn document_title_names_the_project() {
    let project = RawProject::new().with_title("Office Move");

    let record = transform(&project, "Plan.mpp");

    assert_eq!(record.name, "Office Move");
}

#[rstest]
fn missing_title_falls_back_to_the_file_stem() {
    let record = transform(&RawProject::new(), "Plan.mpp");

    assert_eq!(record.name, "Plan");
}

#[rstest]
fn blank_title_falls_back_to_the_file_stem() {
    let project = RawProject::new().with_title("   ");

    let record = transform(&project, "Plan.mpp");

    assert_eq!(record.name, "Plan");
}

#[rstest]
fn only_the_final_extension_is_stripped() {
    let record = transform(&RawProject::new(), "release.plan.mpp");

    assert_eq!(record.name, "release.plan");
}

#[rstest]
fn structured_header_dates_pass_through_unchanged() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 8)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid fixture date");
    let project = RawProject::new()
        .with_title("Rollout")
        .with_start(RawDateTime::Structured(start));

    let record = transform(&project, "rollout.mpp");

    assert_eq!(record.start, Some(start));
    assert_eq!(record.finish, None);
}

#[rstest]
fn calendar_header_timestamps_resolve_in_the_injected_zone() {
    let instant = Utc
        .with_ymd_and_hms(2024, 1, 8, 7, 0, 0)
        .single()
        .expect("valid fixture instant");
    let zone = FixedOffset::east_opt(3600).expect("valid fixture offset");
    let project = RawProject::new()
        .with_title("Rollout")
        .with_finish(RawDateTime::Timestamp(instant));

    let record = transform_in_zone(&project, "rollout.mpp", &zone);

    let expected = NaiveDate::from_ymd_opt(2024, 1, 8)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("valid expected date");
    assert_eq!(record.finish, Some(expected));
}

#[rstest]
fn header_dates_default_to_unset() {
    let record = transform(&RawProject::new().with_title("Bare"), "bare.mpp");

    assert_eq!(record.start, None);
    assert_eq!(record.finish, None);
}

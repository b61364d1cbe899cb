//! Project-level summary extraction.

use crate::plan::ports::RawProject;
use chrono::{NaiveDateTime, TimeZone};
use std::ffi::OsStr;
use std::path::Path;

/// Project header fields for the assembled response.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProjectSummary {
    /// Display name: document title, or the file stem as a fallback.
    pub name: String,
    /// Project-level start in the resolution zone.
    pub start: Option<NaiveDateTime>,
    /// Project-level finish in the resolution zone.
    pub finish: Option<NaiveDateTime>,
}

/// Extracts the project summary from the document header.
///
/// The document's title wins when it is present and non-blank; otherwise
/// the declared file name, stripped of its final extension, names the
/// project.
pub(crate) fn summarize<Tz: TimeZone>(
    project: &RawProject,
    file_name: &str,
    zone: &Tz,
) -> ProjectSummary {
    let name = project
        .title()
        .filter(|title| !title.trim().is_empty())
        .map_or_else(|| file_stem(file_name).to_owned(), str::to_owned);

    ProjectSummary {
        name,
        start: project.start().map(|value| value.resolve_in(zone)),
        finish: project.finish().map(|value| value.resolve_in(zone)),
    }
}

/// File name with its final extension stripped, or unchanged when it has
/// no usable stem.
fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(file_name)
}

//! Source-adapter port and the raw document model it exposes.
//!
//! The external document parser owns the byte-level format. This port fixes
//! the shape it must hand over: a project-properties header plus an arena
//! of raw tasks addressed by stable handles. Handles, not names, carry task
//! identity — names are free to repeat within a document.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Result type for source-adapter operations.
pub type PlanSourceResult<T> = Result<T, PlanSourceError>;

/// Contract for the external document-parsing collaborator.
pub trait PlanSource: Send + Sync {
    /// Parses raw file bytes into a navigable project graph.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanSourceError`] when the byte stream cannot be
    /// interpreted as a project document.
    fn parse(&self, bytes: &[u8]) -> PlanSourceResult<RawProject>;
}

/// Errors returned by source-adapter implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanSourceError {
    /// The byte stream is not a recognizable project document.
    #[error("unreadable project document: {0}")]
    Corrupt(String),

    /// The document format version is not supported by the parser.
    #[error("unsupported document version: {0}")]
    UnsupportedVersion(String),

    /// The byte stream ended before the document was complete.
    #[error("truncated project document: {0}")]
    Truncated(String),
}

/// Date-time as exposed by the source document.
///
/// Documents carry either calendar timestamps or date-times already
/// structured in the document's own local frame. The representation is
/// discriminated once at this boundary; every use site resolves through
/// [`RawDateTime::resolve_in`] instead of re-branching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawDateTime {
    /// Calendar timestamp; converted to a local-zone date-time on use.
    Timestamp(DateTime<Utc>),
    /// Already-structured date-time; used as-is.
    Structured(NaiveDateTime),
}

impl RawDateTime {
    /// Resolves into an offset-free date-time in the given zone.
    #[must_use]
    pub fn resolve_in<Tz: TimeZone>(self, zone: &Tz) -> NaiveDateTime {
        match self {
            Self::Timestamp(instant) => instant.with_timezone(zone).naive_local(),
            Self::Structured(value) => value,
        }
    }
}

/// Duration in the document's native time units.
///
/// The parser supplies the magnitude together with the number of native
/// units that make up one day (a positive factor; the reference
/// collaborator reports milliseconds, so 86 400 000 units per day).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDuration {
    value: f64,
    units_per_day: f64,
}

impl RawDuration {
    /// Native milliseconds in one day.
    const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

    /// Creates a duration from a magnitude and its units-per-day factor.
    #[must_use]
    pub const fn new(value: f64, units_per_day: f64) -> Self {
        Self {
            value,
            units_per_day,
        }
    }

    /// Creates a duration measured in milliseconds.
    #[must_use]
    pub const fn from_milliseconds(value: f64) -> Self {
        Self::new(value, Self::MILLISECONDS_PER_DAY)
    }

    /// Converts the native magnitude to days.
    #[expect(
        clippy::float_arithmetic,
        reason = "unit conversion is inherently a floating-point division"
    )]
    #[must_use]
    pub const fn in_days(self) -> f64 {
        self.value / self.units_per_day
    }
}

/// Stable identity handle for a raw task within its project arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTaskHandle(usize);

/// Raw task entity as exposed by the parsing collaborator.
///
/// Every field is optional; the pipeline decides what a missing value
/// means. Construction follows the builder style so adapters and fixtures
/// only spell out the fields a document actually carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTask {
    name: Option<String>,
    notes: Option<String>,
    start: Option<RawDateTime>,
    finish: Option<RawDateTime>,
    outline_level: Option<i32>,
    parent: Option<RawTaskHandle>,
    percent_complete: Option<f64>,
    actual_start: Option<RawDateTime>,
    duration: Option<RawDuration>,
    priority_score: Option<i32>,
}

impl RawTask {
    /// Creates a task with the given document name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a task carrying no name; the linker filters such entries.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub const fn with_start(mut self, start: RawDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the scheduled finish.
    #[must_use]
    pub const fn with_finish(mut self, finish: RawDateTime) -> Self {
        self.finish = Some(finish);
        self
    }

    /// Sets the outline (indentation) level.
    #[must_use]
    pub const fn with_outline_level(mut self, level: i32) -> Self {
        self.outline_level = Some(level);
        self
    }

    /// Sets the structural parent reference.
    #[must_use]
    pub const fn with_parent(mut self, parent: RawTaskHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the completion percentage.
    #[must_use]
    pub const fn with_percent_complete(mut self, percent: f64) -> Self {
        self.percent_complete = Some(percent);
        self
    }

    /// Sets the actual-start marker.
    #[must_use]
    pub const fn with_actual_start(mut self, actual_start: RawDateTime) -> Self {
        self.actual_start = Some(actual_start);
        self
    }

    /// Sets the native-unit duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: RawDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the numeric priority score.
    #[must_use]
    pub const fn with_priority_score(mut self, score: i32) -> Self {
        self.priority_score = Some(score);
        self
    }

    /// Task name as written in the document.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-form notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Scheduled start.
    #[must_use]
    pub const fn start(&self) -> Option<RawDateTime> {
        self.start
    }

    /// Scheduled finish.
    #[must_use]
    pub const fn finish(&self) -> Option<RawDateTime> {
        self.finish
    }

    /// Outline (indentation) level.
    #[must_use]
    pub const fn outline_level(&self) -> Option<i32> {
        self.outline_level
    }

    /// Structural parent reference.
    #[must_use]
    pub const fn parent(&self) -> Option<RawTaskHandle> {
        self.parent
    }

    /// Completion percentage.
    #[must_use]
    pub const fn percent_complete(&self) -> Option<f64> {
        self.percent_complete
    }

    /// Actual-start marker; derivation only inspects its presence.
    #[must_use]
    pub const fn actual_start(&self) -> Option<RawDateTime> {
        self.actual_start
    }

    /// Native-unit duration.
    #[must_use]
    pub const fn duration(&self) -> Option<RawDuration> {
        self.duration
    }

    /// Numeric priority score.
    #[must_use]
    pub const fn priority_score(&self) -> Option<i32> {
        self.priority_score
    }
}

/// Parsed project document graph exposed by the source adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProject {
    title: Option<String>,
    start: Option<RawDateTime>,
    finish: Option<RawDateTime>,
    tasks: Vec<RawTask>,
}

impl RawProject {
    /// Creates an empty project graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document's project title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the project-level start.
    #[must_use]
    pub const fn with_start(mut self, start: RawDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the project-level finish.
    #[must_use]
    pub const fn with_finish(mut self, finish: RawDateTime) -> Self {
        self.finish = Some(finish);
        self
    }

    /// Appends a task in document order, returning its stable handle.
    pub fn push_task(&mut self, task: RawTask) -> RawTaskHandle {
        let handle = RawTaskHandle(self.tasks.len());
        self.tasks.push(task);
        handle
    }

    /// Links a child to its structural parent after both are in the arena.
    ///
    /// Useful when a document lists a child before its parent. An unknown
    /// child handle is ignored.
    pub fn link_parent(&mut self, child: RawTaskHandle, parent: RawTaskHandle) {
        if let Some(task) = self.tasks.get_mut(child.0) {
            task.parent = Some(parent);
        }
    }

    /// Project title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Project-level start.
    #[must_use]
    pub const fn start(&self) -> Option<RawDateTime> {
        self.start
    }

    /// Project-level finish.
    #[must_use]
    pub const fn finish(&self) -> Option<RawDateTime> {
        self.finish
    }

    /// Number of raw tasks in the arena.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Task addressed by the given handle.
    #[must_use]
    pub fn task(&self, handle: RawTaskHandle) -> Option<&RawTask> {
        self.tasks.get(handle.0)
    }

    /// Iterates tasks in document order together with their handles.
    pub fn tasks(&self) -> impl Iterator<Item = (RawTaskHandle, &RawTask)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (RawTaskHandle(index), task))
    }
}

//! Port contracts for external collaborators.

mod source;

pub use source::{
    PlanSource, PlanSourceError, PlanSourceResult, RawDateTime, RawDuration, RawProject, RawTask,
    RawTaskHandle,
};

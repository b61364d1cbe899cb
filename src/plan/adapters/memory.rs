//! In-memory source adapter backed by a prebuilt project graph.

use crate::plan::ports::{PlanSource, PlanSourceResult, RawProject};

/// Source adapter that serves a fixed, prebuilt project graph.
///
/// Stands in for the external binary parser in tests and local wiring:
/// [`PlanSource::parse`] ignores the byte payload and returns a clone of
/// the configured graph, so pipelines can be exercised without a real
/// document on hand.
#[derive(Debug, Clone)]
pub struct InMemoryPlanSource {
    project: RawProject,
}

impl InMemoryPlanSource {
    /// Creates an adapter serving the given project graph.
    #[must_use]
    pub const fn new(project: RawProject) -> Self {
        Self { project }
    }
}

impl PlanSource for InMemoryPlanSource {
    fn parse(&self, _bytes: &[u8]) -> PlanSourceResult<RawProject> {
        Ok(self.project.clone())
    }
}

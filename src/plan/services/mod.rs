//! Orchestration services for the import pipeline.

mod derive;
mod import;
mod linker;
mod summary;

pub use import::{
    PlanImportError, PlanImportResult, PlanImportService, ValidationError, transform,
    transform_in_zone,
};

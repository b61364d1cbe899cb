//! Import orchestration: validation, parsing, transformation, assembly.

use super::{derive, linker, summary};
use crate::plan::domain::ProjectRecord;
use crate::plan::ports::{PlanSource, PlanSourceError, RawProject};
use chrono::{Local, TimeZone};
use log::{debug, info, warn};
use std::sync::Arc;
use thiserror::Error;

/// Required extension for uploaded plan documents.
const PLAN_EXTENSION: &str = ".mpp";

/// Fixed confirmation returned by the liveness operation.
const HEALTH_MESSAGE: &str = "plan import service is running";

/// Upload failures reported before the source adapter runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The uploaded payload contained no bytes.
    #[error("uploaded file is empty")]
    EmptyFile,

    /// The declared file name does not end in the supported extension.
    #[error("unsupported file '{0}', expected a {PLAN_EXTENSION} document")]
    UnsupportedExtension(String),
}

/// Classified failure for one import request.
///
/// An import either fully succeeds or reports exactly one of these; a
/// half-populated record is never produced.
#[derive(Debug, Clone, Error)]
pub enum PlanImportError {
    /// The upload was rejected before parsing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The source adapter could not interpret the byte stream.
    #[error(transparent)]
    Parse(#[from] PlanSourceError),

    /// Any other failure, reported generically at the outermost boundary.
    #[error("unexpected import failure: {0}")]
    Unexpected(Arc<dyn std::error::Error + Send + Sync>),
}

impl PlanImportError {
    /// Wraps an unclassified failure.
    pub fn unexpected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unexpected(Arc::new(err))
    }
}

/// Result type for import operations.
pub type PlanImportResult<T> = Result<T, PlanImportError>;

/// Front service for the import pipeline.
///
/// Owns the source adapter and the time zone used to resolve calendar
/// timestamps. Production wiring uses the system-local zone; tests inject
/// a fixed offset for determinism.
#[derive(Debug, Clone)]
pub struct PlanImportService<S, Tz = Local>
where
    S: PlanSource,
    Tz: TimeZone,
{
    source: S,
    zone: Tz,
}

impl<S> PlanImportService<S>
where
    S: PlanSource,
{
    /// Creates a service resolving timestamps in the system-local zone.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            zone: Local,
        }
    }
}

impl<S, Tz> PlanImportService<S, Tz>
where
    S: PlanSource,
    Tz: TimeZone,
{
    /// Creates a service resolving timestamps in an explicit zone.
    #[must_use]
    pub const fn with_zone(source: S, zone: Tz) -> Self {
        Self { source, zone }
    }

    /// Imports one uploaded document into its flat output record.
    ///
    /// Validates the upload, hands the bytes to the source adapter, and
    /// transforms the resulting graph. Holds no state across calls.
    ///
    /// # Errors
    ///
    /// Returns [`PlanImportError::Validation`] for an empty payload or an
    /// unsupported file name, and [`PlanImportError::Parse`] when the
    /// source adapter rejects the byte stream.
    pub fn import(&self, bytes: &[u8], file_name: &str) -> PlanImportResult<ProjectRecord> {
        if let Err(err) = validate_upload(bytes, file_name) {
            warn!("event=plan_import status=rejected file_name={file_name} reason={err}");
            return Err(err.into());
        }

        debug!(
            "event=plan_import status=parsing file_name={file_name} size_bytes={}",
            bytes.len()
        );
        let raw = self.source.parse(bytes).map_err(|err| {
            warn!("event=plan_import status=parse_failed file_name={file_name} reason={err}");
            PlanImportError::from(err)
        })?;

        let record = transform_in_zone(&raw, file_name, &self.zone);
        info!(
            "event=plan_import status=ok file_name={file_name} tasks={}",
            record.tasks.len()
        );
        Ok(record)
    }

    /// Liveness confirmation for the enclosing transport.
    #[must_use]
    pub const fn health(&self) -> &'static str {
        HEALTH_MESSAGE
    }
}

/// Rejects uploads the pipeline should never see: empty payloads and file
/// names without the supported extension.
fn validate_upload(bytes: &[u8], file_name: &str) -> Result<(), ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::EmptyFile);
    }
    if !file_name.ends_with(PLAN_EXTENSION) {
        return Err(ValidationError::UnsupportedExtension(file_name.to_owned()));
    }
    Ok(())
}

/// Transforms a parsed project graph into the flat output record, resolving
/// calendar timestamps in the system-local zone.
#[must_use]
pub fn transform(raw: &RawProject, file_name: &str) -> ProjectRecord {
    transform_in_zone(raw, file_name, &Local)
}

/// Transforms a parsed project graph, resolving calendar timestamps in the
/// given zone.
///
/// The composition is infallible: invalid tasks are filtered, unresolvable
/// parent links are dropped, and absent fields fall back to their declared
/// defaults.
#[must_use]
pub fn transform_in_zone<Tz: TimeZone>(
    raw: &RawProject,
    file_name: &str,
    zone: &Tz,
) -> ProjectRecord {
    let summary = summary::summarize(raw, file_name, zone);
    let tasks = linker::link(raw)
        .iter()
        .map(|linked| derive::derive_record(linked, zone))
        .collect();

    ProjectRecord {
        name: summary.name,
        start: summary.start,
        finish: summary.finish,
        tasks,
    }
}

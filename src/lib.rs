//! Planlift: project-plan import and normalization core.
//!
//! This crate ingests an already-parsed project-plan document (tasks,
//! outline levels, dates, priorities) through a source port and flattens
//! it into a normalized, ordered record suitable for API consumption:
//! a project summary plus task records carrying reconstructed parent
//! linkage and derived business fields.
//!
//! # Architecture
//!
//! Planlift follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`plan`]: Plan ingestion, hierarchy linking, and field derivation

pub mod plan;

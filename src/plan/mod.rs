//! Plan import pipeline for Planlift.
//!
//! This module turns the object graph produced by an external document
//! parser into the flat wire record consumed by the API layer: it assigns
//! stable sequential orders to valid tasks, denormalizes each task's
//! structural parent into a name/order pair, derives status, priority,
//! progress, and duration-in-days from the raw fields, and summarizes the
//! project itself. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

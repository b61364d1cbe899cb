//! Adapter implementations of the source port.

mod memory;

pub use memory::InMemoryPlanSource;

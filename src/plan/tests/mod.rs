//! Behaviour tests for the plan import pipeline.

mod deriver_tests;
mod hierarchy_tests;
mod summary_tests;

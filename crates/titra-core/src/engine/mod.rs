//! Stateful parts of the analysis: configuration, per-pH aggregation, progress
//! events and the error type reported by the workflow.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod progress;

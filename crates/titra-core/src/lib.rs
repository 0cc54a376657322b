//! # titra
//!
//! Exclusive-occupancy titration curves from constant-pH simulation logs.
//!
//! A constant-pH run records, for every simulation cycle, whether each of two
//! titratable sites carries a proton. This library reads those logs, merges the
//! cycles of every run performed at the same pH, and estimates for each pH the
//! probability that exactly one of the two sites is protonated.
//!
//! ## Layout
//!
//! - **[`core`]: Data and formats.** Log parsing (`io`), the sample and group
//!   models (`models`) and the occupancy statistic (`stats`).
//!
//! - **[`engine`]: Stateful pieces.** Analysis configuration, the per-pH
//!   aggregator, progress events and the workflow error type.
//!
//! - **[`workflows`]: The public entry point.** [`workflows::titration::run`] turns
//!   a list of log paths into ascending-pH [`workflows::titration::TitrationPoint`]s.

pub mod core;
pub mod engine;
pub mod workflows;

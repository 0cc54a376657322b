//! # Workflows Module
//!
//! High-level entry points that tie the readers, the aggregator and the
//! statistic together.
//!
//! - **[`titration`]** - Reads constant-pH logs and produces one exclusive-occupancy
//!   estimate per pH, in ascending pH order.

pub mod titration;

//! # Core Module
//!
//! Stateless building blocks of the analysis.
//!
//! - **Log I/O** ([`io`]) - Header and table parsing of constant-pH logs, and the
//!   fixed-width text report.
//! - **Models** ([`models`]) - Site-state pairs, per-file sample tables and
//!   per-pH groups with their ordering keys.
//! - **Statistics** ([`stats`]) - The exclusive-occupancy fraction and its
//!   binomial standard error.

pub mod io;
pub mod models;
pub mod stats;

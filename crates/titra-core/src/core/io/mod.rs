//! Provides input/output for constant-pH simulation logs.
//!
//! A log is a line-oriented text file. Lines beginning with a comment marker at
//! the top of the file form the header, which names the pH of the run; every
//! other non-comment line is a whitespace-delimited row of a timestamp followed
//! by the protonation states of the two sites.

pub mod cphlog;
pub mod header;
pub mod report;
pub mod table;
pub mod traits;

//! Data models shared by the readers, the aggregator and the statistic.

pub mod group;
pub mod samples;

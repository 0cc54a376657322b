use crate::core::models::samples::SitePair;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OccupancyError {
    #[error("Cannot estimate occupancy of an empty sample set")]
    EmptyGroup,
}

/// Fraction of cycles with exactly one site protonated, with its standard error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyEstimate {
    pub fraction: f64,
    pub std_error: f64,
    pub samples: usize,
}

/// Estimates the exclusive-occupancy fraction of `samples`.
///
/// `fraction` is the mean of the per-cycle indicator and `std_error` is
/// `sqrt(f * (1 - f) / n)`, the standard error of a Bernoulli mean. Cycles are
/// treated as independent draws; correlation between successive simulation
/// cycles is not accounted for, so the error is a lower bound for correlated
/// trajectories.
#[instrument(level = "trace", skip_all, fields(n = samples.len()))]
pub fn exclusive_occupancy(samples: &[SitePair]) -> Result<OccupancyEstimate, OccupancyError> {
    if samples.is_empty() {
        return Err(OccupancyError::EmptyGroup);
    }

    let n = samples.len();
    let hits: f64 = samples.iter().map(SitePair::exclusive_indicator).sum();
    let fraction = hits / n as f64;
    let std_error = (fraction * (1.0 - fraction) / n as f64).sqrt();

    Ok(OccupancyEstimate {
        fraction,
        std_error,
        samples: n,
    })
}

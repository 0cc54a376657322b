use crate::core::io::cphlog::LogParseError;
use crate::core::stats::occupancy::OccupancyError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No input log files were given")]
    NoInputs,

    #[error("Failed to process '{path}': {source}", path = path.display())]
    File {
        path: PathBuf,
        #[source]
        source: LogParseError,
    },

    #[error("Occupancy estimate failed at pH {ph}: {source}")]
    Occupancy {
        ph: f64,
        #[source]
        source: OccupancyError,
    },
}

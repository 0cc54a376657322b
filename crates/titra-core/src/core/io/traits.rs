use crate::engine::config::LogFormat;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading simulation log formats.
///
/// Implementors parse one log into a record describing the run and the
/// per-cycle data it contains.
pub trait SimulationLog {
    /// Run-level information taken from the log header.
    type Header;

    /// Per-cycle data taken from the log body.
    type Data;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a log from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `format` - Comment marker and header key conventions of the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be read or does not parse.
    fn read_from(
        reader: &mut impl BufRead,
        format: &LogFormat,
    ) -> Result<(Self::Header, Self::Data), Self::Error>;

    /// Opens `path` and reads a log from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        format: &LogFormat,
    ) -> Result<(Self::Header, Self::Data), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, format)
    }
}

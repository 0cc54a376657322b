use super::header::{HeaderInfo, parse_header};
use super::table::parse_table;
use super::traits::SimulationLog;
use crate::core::models::samples::SampleTable;
use crate::engine::config::LogFormat;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("File not found")]
    NotFound(#[source] io::Error),
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
    #[error("Missing required header field '{field}'")]
    MissingHeaderField { field: String },
    #[error("Malformed data row on line {line}: {kind}")]
    MalformedRow { line: usize, kind: RowErrorKind },
    #[error("No data rows found")]
    EmptyTable,
}

impl From<io::Error> for LogParseError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(err)
        } else {
            Self::Io(err)
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowErrorKind {
    #[error("expected at least {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },
    #[error("invalid number in column {column} (value: '{value}')")]
    InvalidNumber { column: usize, value: String },
    #[error("invalid integer in column {column} (value: '{value}')")]
    InvalidInteger { column: usize, value: String },
}

/// A constant-pH simulation log: a `pH` header followed by timestamped site states.
pub struct CphLogFile;

impl SimulationLog for CphLogFile {
    type Header = HeaderInfo;
    type Data = SampleTable;
    type Error = LogParseError;

    fn read_from(
        reader: &mut impl BufRead,
        format: &LogFormat,
    ) -> Result<(HeaderInfo, SampleTable), LogParseError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let header =
            parse_header(&text, format).ok_or_else(|| LogParseError::MissingHeaderField {
                field: format.ph_key.clone(),
            })?;
        let table = parse_table(&text, format)?;
        Ok((header, table))
    }
}

//! Parsing of the per-cycle site-state rows of a log.

use super::cphlog::{LogParseError, RowErrorKind};
use crate::core::models::samples::{SampleTable, SitePair};
use crate::engine::config::LogFormat;

const TIMESTAMP_COLUMN: usize = 0;
const SITE1_COLUMN: usize = 1;
const SITE2_COLUMN: usize = 2;
const MIN_COLUMNS: usize = 3;

/// Reads every data row of `text` into a [`SampleTable`].
///
/// Anything from the comment marker to the end of a line is ignored, so comment
/// lines and trailing notes are skipped wherever they appear; blank lines are
/// skipped too. Column 0 must be numeric and is discarded, columns 1 and 2 must
/// be integers, and further columns are ignored.
///
/// # Errors
///
/// [`LogParseError::MalformedRow`] for the first row that does not fit, and
/// [`LogParseError::EmptyTable`] if the text holds no data rows at all.
pub fn parse_table(text: &str, format: &LogFormat) -> Result<SampleTable, LogParseError> {
    let mut table = SampleTable::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;
        let content = match line.find(format.comment_marker) {
            Some(pos) => &line[..pos],
            None => line,
        };
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let pair = parse_row(&fields).map_err(|kind| LogParseError::MalformedRow {
            line: line_num,
            kind,
        })?;
        table.push(pair);
    }

    if table.is_empty() {
        return Err(LogParseError::EmptyTable);
    }
    Ok(table)
}

fn parse_row(fields: &[&str]) -> Result<SitePair, RowErrorKind> {
    if fields.len() < MIN_COLUMNS {
        return Err(RowErrorKind::TooFewColumns {
            expected: MIN_COLUMNS,
            found: fields.len(),
        });
    }

    let timestamp = fields[TIMESTAMP_COLUMN];
    if timestamp.parse::<f64>().is_err() {
        return Err(RowErrorKind::InvalidNumber {
            column: TIMESTAMP_COLUMN,
            value: timestamp.into(),
        });
    }

    Ok(SitePair::new(
        parse_state(fields, SITE1_COLUMN)?,
        parse_state(fields, SITE2_COLUMN)?,
    ))
}

fn parse_state(fields: &[&str], column: usize) -> Result<i32, RowErrorKind> {
    let value = fields[column];
    value.parse().map_err(|_| RowErrorKind::InvalidInteger {
        column,
        value: value.into(),
    })
}

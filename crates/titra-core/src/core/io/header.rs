//! Extraction of the run's pH from the leading comment block of a log.

use crate::core::models::group::PhValue;
use crate::engine::config::LogFormat;
use tracing::trace;

/// The pH a run was performed at, as declared in its header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    pub ph: PhValue,
    /// The pH token exactly as written, e.g. `7.00`.
    pub label: String,
}

/// Scans the header block of `text` for `<key> <value>`.
///
/// The header is the run of lines at the top of the file that start with the
/// comment marker; scanning stops at the first line that does not. Within each
/// header line only the first occurrence of the key is considered. A missing or
/// unparsable value is skipped and scanning continues, and when several lines
/// carry a usable value the last one wins. `nan` and `inf` parse as numbers but
/// are skipped too, since neither can key or order a pH group.
///
/// Returns `None` if no header line yields a value.
pub fn parse_header(text: &str, format: &LogFormat) -> Option<HeaderInfo> {
    let marker = format.comment_marker;
    let mut found = None;

    for (idx, line) in text
        .lines()
        .take_while(|line| line.starts_with(marker))
        .enumerate()
    {
        let mut tokens = line.trim_start_matches(marker).split_whitespace();
        if tokens.by_ref().find(|t| *t == format.ph_key).is_none() {
            continue;
        }
        let Some(value) = tokens.next() else {
            trace!(line = idx + 1, "Header key without a value, skipping.");
            continue;
        };
        match value.parse::<f64>().ok().and_then(PhValue::new) {
            Some(ph) => {
                found = Some(HeaderInfo {
                    ph,
                    label: value.to_string(),
                });
            }
            None => trace!(line = idx + 1, value, "Ignoring malformed header value."),
        }
    }

    found
}

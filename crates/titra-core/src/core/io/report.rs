use crate::workflows::titration::TitrationPoint;
use std::io::{self, Write};

/// Column labels of the report. The error column is not labelled.
pub const REPORT_HEADER: &str = "#  pH   frac";

/// Formats one report line: pH to two decimals, fraction and error to four.
pub fn format_point(point: &TitrationPoint) -> String {
    format!(
        "{:5.2} {:6.4} {:6.4}",
        point.ph, point.fraction, point.std_error
    )
}

/// Writes the header line followed by one line per point, in the given order.
pub fn write_report(points: &[TitrationPoint], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", REPORT_HEADER)?;
    for point in points {
        writeln!(writer, "{}", format_point(point))?;
    }
    writer.flush()
}

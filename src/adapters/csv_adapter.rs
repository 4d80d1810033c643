//! CSV output for tables.

use crate::domain::error::FrameError;
use crate::domain::table::Table;
use std::io;

/// Writes `table` as CSV: a header of column names, then one record per row.
///
/// Rows are read with [`Table::row_at`], so short columns print as `0`.
pub fn write_table<W: io::Write>(table: &Table, writer: W) -> Result<(), FrameError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let names = table.column_names();
    wtr.write_record(&names)?;

    for i in 0..table.length() {
        let row = table.row_at(i);
        wtr.write_record(row.iter().map(|(_, value)| format_value(value)))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders a table to a CSV string.
pub fn to_csv_string(table: &Table) -> Result<String, FrameError> {
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

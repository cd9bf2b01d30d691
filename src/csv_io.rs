//! Reading tables from CSV and writing samples back out.
//!
//! Cells are carried as text end to end: what was read is exactly what gets
//! written, so exported amounts keep their original formatting.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::DataError;
use crate::sample::Sample;
use crate::table::{Table, Value};

/// Pick a delimiter from the file extension: tab for `.tsv`, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

/// Load a CSV/TSV file into a [`Table`].
pub fn load_csv(path: &Path) -> Result<Table, DataError> {
    let file = File::open(path)?;
    let table = read_csv(file, delimiter_for(path))?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "table loaded"
    );
    Ok(table)
}

/// Parse delimited text into a [`Table`].
///
/// The first record is the header. Each later record becomes a row whose
/// `RowId` is its position after the header. Empty fields become
/// [`Value::Empty`]; everything else is kept as [`Value::Text`].
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<Table, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        // Width is checked by `Table::new` so the error names the row.
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = records.next().ok_or(DataError::EmptyInput)??;
    let columns: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    let rows = records
        .map(|record| {
            record.map(|r| r.iter().map(Value::from).collect::<Vec<_>>())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Table::new(columns, rows)
}

/// Write `sample` as CSV: the header, then the sampled rows in sample order.
///
/// No index column is added.
pub fn write_csv<W: Write>(sample: &Sample<'_>, writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(sample.table().columns())?;
    for row in sample.rows() {
        csv_writer.write_record(row.cells().iter().map(|c| c.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `sample` to a file at `path`.
pub fn export_csv(sample: &Sample<'_>, path: &Path) -> Result<(), DataError> {
    let file = File::create(path)?;
    write_csv(sample, file)?;
    debug!(path = %path.display(), rows = sample.len(), "sample exported");
    Ok(())
}

//! Table loading service
//!
//! Reads a CSV file into a `Table`: the first record becomes the header row,
//! every following record a data row. Records must cover the status column.

use crate::model::row::{Row, Table, STATUS_COLUMN};
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a table from a CSV file.
///
/// The table id is the file stem (e.g. `issues` for `issues.csv`).
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let table_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "table".to_string());

    let file = fs::File::open(path)
        .with_context(|| format!("failed to open table file: {}", path.display()))?;

    read_table(&table_id, file)
        .with_context(|| format!("failed to read table file: {}", path.display()))
}

/// Parse CSV from a reader into a `Table` with the given id.
///
/// All data rows start out visible. A record with fewer than
/// `STATUS_COLUMN + 1` fields has no status and is rejected.
pub fn read_table<R: Read>(table_id: &str, reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("failed to parse CSV record {}", idx))?;
        let cells: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();

        if cells.len() <= STATUS_COLUMN {
            bail!(
                "record {} has {} field(s), expected at least {} (id, status, ...)",
                idx,
                cells.len(),
                STATUS_COLUMN + 1
            );
        }

        if idx == 0 {
            rows.push(Row::header(cells));
        } else {
            rows.push(Row::data(cells));
        }
    }

    if rows.is_empty() {
        bail!("table '{}' is empty", table_id);
    }

    Ok(Table::new(table_id, rows))
}

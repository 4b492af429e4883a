//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType}};

use crate::record::{RawRow, RowTable};

/// Reads survey rows from a CSV file at `path`. Every column is read as text.
pub fn read_rows_csv(path: &Path) -> Result<RowTable> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    let df = CsvReader::new(file)
        .with_options(text_options())
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;
    to_row_table(df)
}

/// Reads survey rows from CSV text.
pub fn read_rows_csv_str(csv: &str) -> Result<RowTable> {
    let df = CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(text_options())
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    to_row_table(df)
}

/// Header row required; schema inference disabled so every column is a string column.
fn text_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Convert a DataFrame into rows keyed by column name, keeping header order.
fn to_row_table(df: DataFrame) -> Result<RowTable> {
    let columns = df.get_column_names().iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();

    let mut rows = vec![RawRow::new(); df.height()];
    for (name, column) in columns.iter().zip(df.get_columns()) {
        let values = column.cast(&DataType::String)
            .with_context(|| format!("[io::csv::read] Failed to read column {name} as text"))?;
        let values = values.str()
            .with_context(|| format!("[io::csv::read] Column {name} is not a string column"))?;
        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            if let Some(value) = value { row.insert(name.as_str(), value) }
        }
    }

    Ok(RowTable::new(columns, rows))
}

//! CSV → schema + row buffer, the CLI's only I/O surface.
//!
//! Caveats: the reference workspace's own CSV reader does no type
//! inference at all (every field comes back as a string scalar); the
//! int-then-float-then-string fallback order here instead follows
//! `emsqrt-core`'s `parse_literal` (used for filter-expression literals,
//! not CSV ingestion), minus its leading bool branch, since a bare `0`/`1`
//! column is far more likely to be numeric than boolean. Good enough for
//! a demonstration front end, not a substitute for a typed ingestion path.

use std::fs::File;
use std::path::Path;

use colstat_core::{Column, Value};
use colstat_engine::InMemoryRows;

use crate::error::{CliError, Result};

pub struct CsvSource {
    pub columns: Vec<Column>,
    pub rows: InMemoryRows,
}

pub fn load(path: impl AsRef<Path>) -> Result<CsvSource> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        return Err(CliError::Schema("CSV file has no header row".into()));
    }
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(i, name))
        .collect();
    let n = columns.len();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row = Vec::with_capacity(n);
        for i in 0..n {
            row.push(match record.get(i) {
                None | Some("") => Value::Null,
                Some(field) => parse_field(field),
            });
        }
        rows.push(row);
    }

    Ok(CsvSource {
        columns,
        rows: InMemoryRows::new(rows),
    })
}

fn parse_field(field: &str) -> Value {
    if let Ok(i) = field.parse::<i64>() {
        Value::I64(i)
    } else if let Ok(f) = field.parse::<f64>() {
        Value::F64(f)
    } else {
        Value::Str(field.to_string())
    }
}

//! CSV decoding for uploaded files
//!
//! Turns uploaded bytes into a header plus raw string rows. Typing happens
//! later in [`Dataset::from_rows`](super::Dataset::from_rows).

use std::collections::HashSet;

use super::errors::{StoreError, StoreResult};
use super::record::RawRow;

/// A decoded but not yet validated table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Decode a UTF-8 CSV document with a header row
pub fn decode_csv(bytes: &[u8]) -> StoreResult<DecodedTable> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| StoreError::decode(format!("input is not valid UTF-8: {}", e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| StoreError::decode(format!("reading CSV header: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(StoreError::decode("No columns to parse from file"));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
        return Err(StoreError::decode(format!("duplicate column '{}'", dup)));
    }

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| StoreError::decode(format!("CSV row {}: {}", i + 1, e)))?;

        let row: RawRow = columns
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok(DecodedTable { columns, rows })
}

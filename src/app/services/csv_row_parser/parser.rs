//! Core row parser implementation
//!
//! Reads trimmed CSV text with a `csv::Reader`, resolves the column mapping
//! once from the header record, then yields one [`RawRow`] per data record in
//! input order. Quote characters carry no meaning and every comma separates
//! a field; records may be shorter or longer than the header.

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use super::column_mapping::{Column, ColumnMapping};
use crate::constants::CSV_DELIMITER;

/// Raw field values for one CSV record, addressable by recognized column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number within the trimmed input (the header is line 1)
    pub line_number: usize,

    record: StringRecord,
    positions: [Option<usize>; 7],
}

impl RawRow {
    /// Wrap a data record with the positions resolved from the header
    pub fn from_record(record: StringRecord, mapping: &ColumnMapping) -> Self {
        let line_number = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();

        RawRow {
            line_number,
            record,
            positions: mapping.positions(),
        }
    }

    /// Raw text for a column, `None` when the column is absent from the
    /// header or the record is too short to reach it
    pub fn get(&self, column: Column) -> Option<&str> {
        self.positions[column.slot()].and_then(|index| self.record.get(index))
    }

    /// Raw text for a column with absence mapped to the empty string
    pub fn get_or_empty(&self, column: Column) -> &str {
        self.get(column).unwrap_or("")
    }
}

/// Lazy iterator over the data records of a CSV document
#[derive(Debug)]
pub struct CsvRows<'a> {
    mapping: ColumnMapping,
    reader: csv::Reader<&'a [u8]>,
}

impl<'a> CsvRows<'a> {
    /// Column mapping resolved from the header record
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }
}

impl<'a> Iterator for CsvRows<'a> {
    type Item = RawRow;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => return Some(RawRow::from_record(record, &self.mapping)),
                Ok(false) => return None,
                Err(e) => debug!("Skipping unreadable CSV record: {}", e),
            }
        }
    }
}

/// Parse CSV text into rows with named-field lookup
///
/// The input is trimmed first; the first record is the header and every
/// following non-empty line is a data row. `\r\n` line endings are accepted.
/// Header-only input yields no rows. Empty input is the caller's concern: it
/// yields a mapping with no recognized columns and no rows.
pub fn parse_rows(csv: &str) -> CsvRows<'_> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .delimiter(CSV_DELIMITER)
        .from_reader(csv.trim().as_bytes());

    let mapping = reader
        .headers()
        .map(ColumnMapping::analyze)
        .unwrap_or_default();

    CsvRows { mapping, reader }
}

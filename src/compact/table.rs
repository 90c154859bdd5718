//! Decoded tabular data
//!
//! A [`CompactTable`] owns the columns and rows decoded from one metadata
//! element, plus a column-name index built exactly once at construction.
//! Tables are immutable after construction and safe to read from multiple
//! threads without synchronization.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Column-name to zero-based position map, built once per table
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index from an ordered column list.
    ///
    /// When a column name repeats, the first occurrence's position wins.
    pub fn new(columns: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            positions.entry(column.clone()).or_insert(i);
        }
        Self { positions }
    }

    /// Position of a column, if known
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

/// One decoded metadata table: identifier, version/date stamps, and the
/// column/row grid with an attached index
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompactTable {
    /// Canonical record identifier (`Resource`, `Resource:Class`, or
    /// `Resource:Lookup` depending on the element's attributes)
    pub id: String,
    /// Metadata version, copied verbatim from the element
    pub version: String,
    /// Metadata date, copied verbatim from the element
    pub date: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    #[serde(skip)]
    index: ColumnIndex,
}

impl CompactTable {
    /// Build a table from already-split columns and rows.
    ///
    /// Every row must have exactly as many fields as the header; a mismatch
    /// means the upstream document was malformed and is reported, never
    /// silently padded or truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::RowShapeMismatch {
                    row: i,
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }
        let index = ColumnIndex::new(&columns);
        Ok(Self {
            id: String::new(),
            version: String::new(),
            date: String::new(),
            columns,
            rows,
            index,
        })
    }

    /// Build a table by splitting a compact header string and raw row
    /// strings on the response's delimiter
    pub fn from_compact(columns: &str, rows: &[String], delimiter: char) -> Result<Self> {
        let columns = super::split_compact_row(columns, delimiter);
        let rows = rows
            .iter()
            .map(|row| super::split_compact_row(row, delimiter))
            .collect();
        Self::new(columns, rows)
    }

    /// Ordered column names, header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Decoded rows, document order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field value at `(column, row)`, via the prebuilt index
    pub fn lookup(&self, column: &str, row: usize) -> Result<&str> {
        let position = self
            .index
            .position(column)
            .ok_or_else(|| Error::unknown_column(column))?;
        let row = self.rows.get(row).ok_or(Error::RowIndexOutOfRange {
            row,
            rows: self.rows.len(),
        })?;
        Ok(&row[position])
    }
}

//! The table container and its row operations

use std::fmt;

use indexmap::IndexMap;

use crate::error::TableError;

use super::Value;

/// An in-memory table: a fixed header of column names plus the data rows
/// added so far, each exactly as wide as the header.
///
/// Rows are addressed by 0-based position among the currently stored rows;
/// removing a row shifts every later row down by one, so indices are
/// recomputed on each access rather than acting as stable identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names, fixed at construction
    header: Vec<String>,
    /// Data rows in insertion order, each `header.len()` wide
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given column names.
    ///
    /// Names are taken as-is: duplicates and an empty sequence are both
    /// accepted.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Column names in order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get column position by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|n| n == name)
    }

    /// Number of data rows (the header is not a row)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index that the next appended row will receive. Equal to
    /// [`row_count`](Self::row_count); no side effect.
    pub fn next_index(&self) -> usize {
        self.rows.len()
    }

    /// Check that `row` is exactly as wide as the header and pass it back
    /// unchanged.
    pub fn validate(&self, row: Vec<Value>) -> Result<Vec<Value>, TableError> {
        if row.len() != self.header.len() {
            return Err(TableError {
                expected: self.header.len(),
                got: row.len(),
            });
        }
        Ok(row)
    }

    /// Append a row and return its newly assigned index.
    ///
    /// Fails with [`TableError`] when the row is not exactly as wide as the
    /// header; the table is left unmodified in that case.
    pub fn add_row(&mut self, row: Vec<Value>) -> Result<usize, TableError> {
        let row = self.validate(row)?;
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Get the row at `index`, or `None` when no such row exists.
    pub fn get_row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Remove the row at `index`; later rows shift down by one.
    /// An out-of-range index is a silent no-op, not an error.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Iterate the data rows as column-name-to-value mappings in insertion
    /// order, each mapping keyed in header order.
    ///
    /// The iterator is lazy and borrows the table; call `iter` again to
    /// restart from the first row.
    pub fn iter(&self) -> impl Iterator<Item = IndexMap<&str, &Value>> + '_ {
        self.rows.iter().map(|row| {
            self.header
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect()
        })
    }

    /// Short one-line form listing the header only.
    pub fn summary(&self) -> String {
        let names: Vec<String> = self.header.iter().map(|n| format!("'{}'", n)).collect();
        format!("<Table with [{}]>", names.join(", "))
    }
}

/// Detailed form: the header line followed by one space-joined line per
/// row, with no trailing newline.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header.join(" "))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "\n{}", cells.join(" "))?;
        }
        Ok(())
    }
}

//! Error type for table operations

use thiserror::Error;

/// The single failure a table signals: a row whose element count does not
/// match the header's column count.
///
/// Out-of-range row indices are never an error; lookups return `None` and
/// removals are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row length mismatch: table has {expected} columns, row has {got} values")]
pub struct TableError {
    /// Column count of the table's header.
    pub expected: usize,
    /// Element count of the rejected row.
    pub got: usize,
}

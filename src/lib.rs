//! rowset - Minimal in-memory tabular data container
//!
//! A [`Table`] is a fixed header of column names plus a growable list of
//! column-aligned rows of dynamically typed [`Value`]s. Rows are appended,
//! looked up, and removed by 0-based position; iterating a table yields one
//! column-name-to-value mapping per row.

pub mod error;
pub mod model;
pub mod output;

pub use error::TableError;
pub use model::{Table, Value};

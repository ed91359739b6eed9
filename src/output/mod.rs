//! Textual rendering of tables for logging and debugging

mod json;
mod text;

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

pub use json::JsonOutput;
pub use text::TextOutput;

/// Trait for table renderers
pub trait OutputFormatter {
    /// Render the table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Render a table to an in-memory string
pub fn render_to_string(table: &Table, formatter: &dyn OutputFormatter) -> Result<String> {
    let mut buf = Vec::new();
    formatter.render(table, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

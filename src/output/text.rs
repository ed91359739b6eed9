//! Plain-text output format

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

use super::OutputFormatter;

/// Streams the detailed text form: the header line, then one space-joined
/// line per row.
pub struct TextOutput;

impl OutputFormatter for TextOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "{}", table)?;
        Ok(())
    }
}

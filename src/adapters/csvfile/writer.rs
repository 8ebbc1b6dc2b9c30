//! CSV table writer

use crate::adapters::tabular::TableWriter;
use crate::domain::{Result, SheetCsvError, SheetTable};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::Path;

/// Writes tables as comma-separated values
///
/// Output is fixed: comma delimiter, `\n` line endings, quoting only for
/// fields that contain a comma, quote, or line break.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableWriter;

impl CsvTableWriter {
    /// Create a new writer
    pub fn new() -> Self {
        Self
    }

    fn builder() -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .delimiter(b',')
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'));
        builder
    }

    /// Serialize `table` into an in-memory buffer
    pub fn to_bytes(&self, table: &SheetTable) -> Result<Vec<u8>> {
        let mut writer = Self::builder().from_writer(Vec::new());
        for record in table.records() {
            writer.write_record(record)?;
        }
        writer
            .into_inner()
            .map_err(|e| SheetCsvError::Csv(e.to_string()))
    }
}

impl TableWriter for CsvTableWriter {
    fn write_table(&self, table: &SheetTable, path: &Path) -> Result<()> {
        let mut writer = Self::builder().from_path(path)?;
        for record in table.records() {
            writer.write_record(record)?;
        }
        writer.flush()?;

        tracing::trace!(
            path = %path.display(),
            rows = table.height(),
            "Wrote CSV"
        );
        Ok(())
    }
}

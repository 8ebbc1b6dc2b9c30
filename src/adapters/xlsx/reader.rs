//! Workbook reader backed by calamine

use super::cells::render_row;
use crate::adapters::tabular::{Workbook, WorkbookReader};
use crate::domain::{Result, SheetTable, WorkbookError};
use calamine::{open_workbook, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Extension of the workbooks this adapter decodes
pub const XLSX_EXTENSION: &str = "xlsx";

/// Opens `.xlsx` workbooks
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxReader;

impl XlsxReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookReader for XlsxReader {
    fn extension(&self) -> &str {
        XLSX_EXTENSION
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>> {
        let inner: Xlsx<BufReader<File>> =
            open_workbook(path).map_err(|e| WorkbookError::open_failed(path, e))?;

        tracing::debug!(path = %path.display(), "Opened workbook");

        Ok(Box::new(XlsxWorkbook {
            path: path.to_path_buf(),
            inner,
        }))
    }
}

/// An open `.xlsx` workbook
pub struct XlsxWorkbook {
    path: PathBuf,
    inner: Xlsx<BufReader<File>>,
}

impl Workbook for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<SheetTable> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| WorkbookError::sheet_unreadable(&self.path, name, e))?;

        // The range starts at the first used cell; keep leading empty columns
        let leading = range.start().map_or(0, |(_, col)| col as usize);
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| {
                let mut cells = vec![String::new(); leading];
                cells.extend(render_row(row));
                cells
            })
            .collect();

        tracing::trace!(
            sheet = %name,
            rows = rows.len(),
            "Decoded sheet"
        );

        Ok(SheetTable::from_rows(rows))
    }
}

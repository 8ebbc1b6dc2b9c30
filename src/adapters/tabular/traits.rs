//! Tabular I/O abstraction traits
//!
//! This module defines the two narrow capabilities the exporter needs from
//! the outside world: reading sheets out of a workbook file and writing a
//! table to a CSV file. Everything else (discovery, naming, directory
//! layout, fault isolation) is written against these traits.

use crate::domain::{Result, SheetTable};
use std::path::Path;

/// Opens workbook files
pub trait WorkbookReader {
    /// File extension (without the dot) of the workbooks this reader decodes
    fn extension(&self) -> &str;

    /// Open the workbook at `path`
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::WorkbookError::OpenFailed`] if the file is
    /// unreadable, corrupt, or not in the expected format.
    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>>;
}

/// An open workbook
///
/// The underlying file handle is released when the value is dropped.
pub trait Workbook {
    /// Sheet names in the workbook's declared order
    fn sheet_names(&self) -> Vec<String>;

    /// Load the full contents of one sheet
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::WorkbookError::SheetUnreadable`] if the
    /// sheet cannot be decoded.
    fn read_sheet(&mut self, name: &str) -> Result<SheetTable>;
}

/// Writes tables to files
pub trait TableWriter {
    /// Write `table` to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    fn write_table(&self, table: &SheetTable, path: &Path) -> Result<()>;
}

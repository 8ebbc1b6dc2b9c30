//! Export orchestration
//!
//! This module provides the core export logic for sheetcsv, including:
//! - Workbook discovery and output layout
//! - The exporter that turns each workbook into a folder of CSV files
//! - Summary and reporting

pub mod discovery;
pub mod exporter;
pub mod summary;

use std::path::Path;

pub use discovery::{csv_path_for, discover_workbooks, output_dir_for};
pub use exporter::{ExportOptions, Exporter};
pub use summary::{
    ExportError, ExportErrorType, ExportSummary, RunStatus, SheetExport, WorkbookOutcome,
};

/// Export every `.xlsx` workbook in `dataset_dir` to CSV with default options
///
/// Never fails; outcomes are reported through logging and the returned
/// summary.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let summary = sheetcsv::core::export::export(Path::new("dataset"));
/// println!("{} sheet(s) written", summary.sheets_exported());
/// ```
pub fn export(dataset_dir: &Path) -> ExportSummary {
    Exporter::xlsx(ExportOptions::default()).export(dataset_dir)
}

//! Workbook discovery and output layout
//!
//! Finds the workbooks directly inside a dataset folder and computes where
//! each workbook's CSV files go.

use crate::domain::{Result, SanitizedSheetName, WorkbookName};
use std::fs;
use std::path::{Path, PathBuf};

/// List the workbook files directly inside `dataset_dir`
///
/// Only regular files whose extension equals `extension` (ignoring ASCII
/// case) are returned, so `REPORT.XLSX` is picked up on every platform, not
/// only on case-insensitive filesystems. Subdirectories are not descended
/// into. The result is sorted by path so repeated runs process workbooks in
/// the same order.
///
/// # Errors
///
/// Returns an error if the folder cannot be listed.
pub fn discover_workbooks(dataset_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut workbooks = Vec::new();

    for entry in fs::read_dir(dataset_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            workbooks.push(path);
        }
    }

    workbooks.sort();
    Ok(workbooks)
}

/// Output directory for a workbook: a sibling of the dataset folder named
/// after the workbook's base name
pub fn output_dir_for(dataset_dir: &Path, workbook: &WorkbookName) -> PathBuf {
    dataset_dir
        .parent()
        .unwrap_or(dataset_dir)
        .join(workbook.as_str())
}

/// CSV path for a sheet inside a workbook's output directory
pub fn csv_path_for(output_dir: &Path, sheet: &SanitizedSheetName) -> PathBuf {
    output_dir.join(sheet.csv_file_name())
}

//! Filesystem-facing name types
//!
//! Newtype wrappers for the two names that end up on disk: the workbook base
//! name (which becomes an output directory) and the sanitized sheet name
//! (which becomes a CSV file name).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Extension given to every exported sheet
pub const CSV_EXTENSION: &str = "csv";

/// Workbook base name: the workbook file name with its extension stripped
///
/// # Examples
///
/// ```
/// use sheetcsv::domain::names::WorkbookName;
/// use std::path::Path;
///
/// let name = WorkbookName::from_path(Path::new("dataset/sales.2024.xlsx")).unwrap();
/// assert_eq!(name.as_str(), "sales.2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkbookName(String);

impl WorkbookName {
    /// Derives the base name from a workbook path
    ///
    /// Returns `None` for paths without a file stem (e.g. `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .map(|stem| Self(stem.to_string_lossy().into_owned()))
    }

    /// Returns the base name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkbookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WorkbookName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sheet name reduced to characters that are safe in a file name
///
/// Only alphanumeric characters, spaces, hyphens and underscores survive,
/// and surrounding whitespace is trimmed. Distinct sheet names may map to
/// the same sanitized name; no deduplication happens here.
///
/// # Examples
///
/// ```
/// use sheetcsv::domain::names::SanitizedSheetName;
///
/// let name = SanitizedSheetName::new("Sales/Q1*");
/// assert_eq!(name.csv_file_name(), "SalesQ1.csv");
///
/// let name = SanitizedSheetName::new("  Report  ");
/// assert_eq!(name.as_str(), "Report");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SanitizedSheetName(String);

impl SanitizedSheetName {
    /// Sanitizes a raw sheet name
    pub fn new(sheet_name: &str) -> Self {
        let kept: String = sheet_name
            .chars()
            .filter(|c| is_safe_char(*c))
            .collect();
        Self(kept.trim().to_string())
    }

    /// Returns the sanitized name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the CSV artifact for this sheet
    pub fn csv_file_name(&self) -> String {
        format!("{}.{}", self.0, CSV_EXTENSION)
    }
}

impl fmt::Display for SanitizedSheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SanitizedSheetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_safe_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '-' || c == '_'
}

//! Domain error types
//!
//! This module defines the error hierarchy for sheetcsv.
//! Errors are domain-specific and don't expose third-party types: decoder,
//! CSV and TOML errors are flattened to messages at the adapter boundary.

use std::path::Path;
use thiserror::Error;

/// Main sheetcsv error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum SheetCsvError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Workbook could not be opened or parsed
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Workbook-level failures
///
/// Every variant carries the file or sheet it refers to so a reported
/// failure can be traced back to its input without extra context.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The file could not be opened as a workbook (corrupt, not a zip,
    /// unsupported internal format)
    #[error("Failed to open {file}: {message}")]
    OpenFailed { file: String, message: String },

    /// A sheet listed in the workbook could not be decoded
    #[error("Failed to read sheet '{sheet}' in {file}: {message}")]
    SheetUnreadable {
        file: String,
        sheet: String,
        message: String,
    },
}

impl WorkbookError {
    /// Builds an [`WorkbookError::OpenFailed`] for `path`
    pub fn open_failed(path: &Path, message: impl ToString) -> Self {
        Self::OpenFailed {
            file: file_label(path),
            message: message.to_string(),
        }
    }

    /// Builds an [`WorkbookError::SheetUnreadable`] for `sheet` in `path`
    pub fn sheet_unreadable(path: &Path, sheet: &str, message: impl ToString) -> Self {
        Self::SheetUnreadable {
            file: file_label(path),
            sheet: sheet.to_string(),
            message: message.to_string(),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// Conversion from std::io::Error
impl From<std::io::Error> for SheetCsvError {
    fn from(err: std::io::Error) -> Self {
        SheetCsvError::Io(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for SheetCsvError {
    fn from(err: csv::Error) -> Self {
        SheetCsvError::Csv(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SheetCsvError {
    fn from(err: toml::de::Error) -> Self {
        SheetCsvError::Configuration(format!("TOML parse error: {err}"))
    }
}

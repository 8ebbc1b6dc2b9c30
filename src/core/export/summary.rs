//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.
//! Each workbook gets its own [`WorkbookOutcome`]; a failure recorded on one
//! outcome never affects the others.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// How far a run got before it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every discovered workbook was attempted
    Completed,
    /// The dataset folder does not exist; nothing was attempted
    DatasetMissing,
    /// The dataset folder holds no workbooks; nothing was attempted
    NoWorkbooks,
}

/// A single sheet written (or, in dry-run mode, planned) as CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetExport {
    /// Sheet name as declared in the workbook
    pub sheet_name: String,

    /// Destination CSV path
    pub csv_path: PathBuf,

    /// Number of data rows (header excluded)
    pub rows: usize,

    /// Number of columns
    pub columns: usize,

    /// True when an earlier sheet of the same workbook already targeted
    /// `csv_path` and was overwritten by this one
    pub overwrote_earlier: bool,
}

/// Result of processing one workbook
#[derive(Debug, Clone)]
pub struct WorkbookOutcome {
    /// Workbook file
    pub source: PathBuf,

    /// Output directory for this workbook's CSV files
    pub output_dir: PathBuf,

    /// Sheets exported before the workbook finished or failed
    pub sheets: Vec<SheetExport>,

    /// Failure that ended processing of this workbook, if any
    pub error: Option<ExportError>,
}

impl WorkbookOutcome {
    /// Create an outcome with no sheets and no error yet
    pub fn new(source: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            source,
            output_dir,
            sheets: Vec::new(),
            error: None,
        }
    }

    /// True when the workbook was processed without error
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// File name of the source workbook, for display
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Dataset folder that was scanned
    pub dataset_dir: PathBuf,

    /// How the run ended
    pub status: RunStatus,

    /// Whether files were actually written
    pub dry_run: bool,

    /// One entry per discovered workbook, in processing order
    pub outcomes: Vec<WorkbookOutcome>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(dataset_dir: PathBuf, status: RunStatus, dry_run: bool) -> Self {
        Self {
            dataset_dir,
            status,
            dry_run,
            outcomes: Vec::new(),
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome of one workbook
    pub fn add_outcome(&mut self, outcome: WorkbookOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of workbooks discovered
    pub fn workbooks_found(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of workbooks processed without error
    pub fn workbooks_succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of workbooks that failed
    pub fn workbooks_failed(&self) -> usize {
        self.workbooks_found() - self.workbooks_succeeded()
    }

    /// Number of sheets exported across all workbooks
    pub fn sheets_exported(&self) -> usize {
        self.outcomes.iter().map(|o| o.sheets.len()).sum()
    }

    /// Check if the export was successful (dataset present, no failures)
    pub fn is_successful(&self) -> bool {
        self.status != RunStatus::DatasetMissing && self.workbooks_failed() == 0
    }

    /// Failed outcomes paired with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&WorkbookOutcome, &ExportError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error.as_ref().map(|e| (o, e)))
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            dataset = %self.dataset_dir.display(),
            workbooks = self.workbooks_found(),
            succeeded = self.workbooks_succeeded(),
            failed = self.workbooks_failed(),
            sheets = self.sheets_exported(),
            dry_run = self.dry_run,
            started_at = %self.started_at.to_rfc3339(),
            duration_ms = self.duration.as_millis() as u64,
            "Export finished"
        );
    }
}

/// Type of export error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Output directory could not be created
    Directory,
    /// Workbook could not be opened or parsed
    Open,
    /// A sheet could not be decoded
    Read,
    /// A CSV file could not be written
    Write,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message (the underlying cause)
    pub message: String,

    /// Optional context (e.g. sheet name)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}

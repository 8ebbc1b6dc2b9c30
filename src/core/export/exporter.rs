//! Exporter - orchestrates discovery, decoding and CSV emission
//!
//! The exporter never returns an error: a missing dataset folder or an
//! empty one ends the run early, and any failure inside a workbook is
//! recorded on that workbook's outcome before moving on to the next one.

use crate::adapters::csvfile::CsvTableWriter;
use crate::adapters::tabular::{TableWriter, WorkbookReader};
use crate::adapters::xlsx::XlsxReader;
use crate::core::export::discovery::{csv_path_for, discover_workbooks, output_dir_for};
use crate::core::export::summary::{
    ExportError, ExportErrorType, ExportSummary, RunStatus, SheetExport, WorkbookOutcome,
};
use crate::domain::{SanitizedSheetName, SheetCsvError, WorkbookError, WorkbookName};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options controlling an export run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Decode every sheet but create no directories and write no files
    pub dry_run: bool,
}

/// Exporter
pub struct Exporter {
    reader: Box<dyn WorkbookReader>,
    writer: Box<dyn TableWriter>,
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter over arbitrary reader and writer implementations
    pub fn new(
        reader: Box<dyn WorkbookReader>,
        writer: Box<dyn TableWriter>,
        options: ExportOptions,
    ) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// Create an exporter that reads `.xlsx` workbooks and writes CSV files
    pub fn xlsx(options: ExportOptions) -> Self {
        Self::new(
            Box::new(XlsxReader::new()),
            Box::new(CsvTableWriter::new()),
            options,
        )
    }

    /// Export every workbook in `dataset_dir`
    ///
    /// 1. Checks the dataset folder exists
    /// 2. Discovers workbooks directly inside it
    /// 3. For each workbook:
    ///    - Creates `<parent of dataset_dir>/<workbook base name>/`
    ///    - Writes one `<sanitized sheet name>.csv` per sheet
    /// 4. Returns a summary with one outcome per workbook
    pub fn export(&self, dataset_dir: &Path) -> ExportSummary {
        let start_time = Instant::now();
        let dry_run = self.options.dry_run;

        if !dataset_dir.exists() {
            tracing::error!(
                dataset = %dataset_dir.display(),
                "Dataset folder not found: {}",
                dataset_dir.display()
            );
            return ExportSummary::new(dataset_dir.to_path_buf(), RunStatus::DatasetMissing, dry_run)
                .with_duration(start_time.elapsed());
        }

        let extension = self.reader.extension().to_string();

        if !dataset_dir.is_dir() {
            tracing::info!(
                dataset = %dataset_dir.display(),
                "No .{} files found in {} (not a directory)",
                extension,
                dataset_dir.display()
            );
            return ExportSummary::new(dataset_dir.to_path_buf(), RunStatus::NoWorkbooks, dry_run)
                .with_duration(start_time.elapsed());
        }

        let workbooks = match discover_workbooks(dataset_dir, &extension) {
            Ok(workbooks) => workbooks,
            Err(e) => {
                tracing::error!(
                    dataset = %dataset_dir.display(),
                    error = %e,
                    "Failed to list dataset folder"
                );
                return ExportSummary::new(
                    dataset_dir.to_path_buf(),
                    RunStatus::DatasetMissing,
                    dry_run,
                )
                .with_duration(start_time.elapsed());
            }
        };

        if workbooks.is_empty() {
            tracing::info!(
                dataset = %dataset_dir.display(),
                "No .{} files found in {}",
                extension,
                dataset_dir.display()
            );
            return ExportSummary::new(dataset_dir.to_path_buf(), RunStatus::NoWorkbooks, dry_run)
                .with_duration(start_time.elapsed());
        }

        tracing::info!(
            count = workbooks.len(),
            dataset = %dataset_dir.display(),
            "Found {} .{} file(s) to process",
            workbooks.len(),
            extension
        );

        let mut summary =
            ExportSummary::new(dataset_dir.to_path_buf(), RunStatus::Completed, dry_run);

        for workbook in workbooks {
            let outcome = self.export_workbook(dataset_dir, workbook);
            if let Some(error) = &outcome.error {
                tracing::error!(
                    file = %outcome.file_name(),
                    error_type = ?error.error_type,
                    "Error processing {}: {}",
                    outcome.file_name(),
                    error.message
                );
            }
            summary.add_outcome(outcome);
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }

    /// Process one workbook, capturing any failure in the returned outcome
    fn export_workbook(&self, dataset_dir: &Path, source: PathBuf) -> WorkbookOutcome {
        let Some(name) = WorkbookName::from_path(&source) else {
            let mut outcome = WorkbookOutcome::new(source, PathBuf::new());
            outcome.error = Some(ExportError::new(
                ExportErrorType::Open,
                "Workbook path has no file name".to_string(),
            ));
            return outcome;
        };

        let output_dir = output_dir_for(dataset_dir, &name);
        let mut outcome = WorkbookOutcome::new(source, output_dir);

        if let Err(error) = self.write_sheets(&mut outcome) {
            outcome.error = Some(error);
        }
        outcome
    }

    fn write_sheets(&self, outcome: &mut WorkbookOutcome) -> Result<(), ExportError> {
        if !self.options.dry_run {
            fs::create_dir_all(&outcome.output_dir).map_err(|e| {
                ExportError::new(ExportErrorType::Directory, e.to_string())
                    .with_context(format!("output_dir={}", outcome.output_dir.display()))
            })?;
        }

        tracing::info!(
            source = %outcome.source.display(),
            output_dir = %outcome.output_dir.display(),
            "Processing {} -> {}",
            outcome.file_name(),
            outcome.output_dir.display()
        );

        let mut workbook = self.reader.open(&outcome.source).map_err(open_error)?;
        let mut written: HashSet<PathBuf> = HashSet::new();

        for sheet_name in workbook.sheet_names() {
            let table = workbook
                .read_sheet(&sheet_name)
                .map_err(|e| read_error(e, &sheet_name))?;

            let sanitized = SanitizedSheetName::new(&sheet_name);
            let csv_path = csv_path_for(&outcome.output_dir, &sanitized);
            let overwrote_earlier = !written.insert(csv_path.clone());
            if overwrote_earlier {
                tracing::debug!(
                    sheet = %sheet_name,
                    csv = %csv_path.display(),
                    "Sanitized sheet name collides with an earlier sheet; overwriting"
                );
            }

            if !self.options.dry_run {
                self.writer.write_table(&table, &csv_path).map_err(|e| {
                    ExportError::new(ExportErrorType::Write, e.to_string())
                        .with_context(format!("sheet={sheet_name}"))
                })?;
            }

            tracing::info!(
                sheet = %sheet_name,
                rows = table.height(),
                columns = table.width(),
                "  Sheet '{}' -> {}",
                sheet_name,
                sanitized.csv_file_name()
            );

            outcome.sheets.push(SheetExport {
                sheet_name,
                csv_path,
                rows: table.height(),
                columns: table.width(),
                overwrote_earlier,
            });
        }

        Ok(())
    }
}

fn open_error(err: SheetCsvError) -> ExportError {
    let message = match err {
        SheetCsvError::Workbook(WorkbookError::OpenFailed { message, .. }) => message,
        other => other.to_string(),
    };
    ExportError::new(ExportErrorType::Open, message)
}

fn read_error(err: SheetCsvError, sheet_name: &str) -> ExportError {
    let message = match err {
        SheetCsvError::Workbook(WorkbookError::SheetUnreadable { message, .. }) => message,
        other => other.to_string(),
    };
    ExportError::new(ExportErrorType::Read, message).with_context(format!("sheet={sheet_name}"))
}

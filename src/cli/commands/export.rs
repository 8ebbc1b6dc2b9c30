//! Export command implementation
//!
//! This module implements the `export` command (also the default when no
//! subcommand is given), which converts every workbook in the dataset folder
//! into per-sheet CSV files.

use crate::config::SheetCsvConfig;
use crate::core::export::{ExportOptions, ExportSummary, Exporter, RunStatus};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Dataset folder holding the workbooks (defaults to export.dataset_dir,
    /// which defaults to "dataset")
    pub dataset: Option<PathBuf>,

    /// Dry run mode - read every sheet but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero when the dataset folder is missing or a workbook failed
    #[arg(long)]
    pub strict: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &SheetCsvConfig) -> anyhow::Result<i32> {
        let dataset = self
            .dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.export.dataset_dir));
        let dry_run = self.dry_run || config.export.dry_run;
        let strict = self.strict || config.export.fail_on_error;

        tracing::debug!(
            dataset = %dataset.display(),
            dry_run,
            strict,
            "Starting export command"
        );

        if dry_run {
            println!("🔍 DRY RUN MODE - No directories or files will be written");
            println!();
        }

        let exporter = Exporter::xlsx(ExportOptions { dry_run });
        let summary = exporter.export(&dataset);

        print_summary(&summary);

        Ok(exit_code(&summary, strict))
    }
}

fn print_summary(summary: &ExportSummary) {
    match summary.status {
        RunStatus::DatasetMissing => {
            println!(
                "❌ Dataset folder not found: {}",
                summary.dataset_dir.display()
            );
            return;
        }
        RunStatus::NoWorkbooks => {
            println!(
                "ℹ️  No workbooks found in {}",
                summary.dataset_dir.display()
            );
            return;
        }
        RunStatus::Completed => {}
    }

    if summary.dry_run {
        println!("Planned output:");
        for outcome in &summary.outcomes {
            println!("  {} -> {}", outcome.file_name(), outcome.output_dir.display());
            for sheet in &outcome.sheets {
                let note = if sheet.overwrote_earlier {
                    " (overwrites an earlier sheet)"
                } else {
                    ""
                };
                println!(
                    "    - '{}' -> {} ({} rows x {} columns){}",
                    sheet.sheet_name,
                    sheet.csv_path.display(),
                    sheet.rows,
                    sheet.columns,
                    note
                );
            }
        }
        println!();
    }

    println!("📊 Export Summary:");
    println!("  Dataset: {}", summary.dataset_dir.display());
    println!(
        "  Started: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Workbooks Found: {}", summary.workbooks_found());
    println!("  Succeeded: {}", summary.workbooks_succeeded());
    println!("  Failed: {}", summary.workbooks_failed());
    println!("  Sheets Exported: {}", summary.sheets_exported());
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if summary.workbooks_failed() > 0 {
        println!("⚠️  Errors encountered:");
        for (outcome, error) in summary.failures() {
            println!(
                "  - {} ({:?}): {}",
                outcome.file_name(),
                error.error_type,
                error.message
            );
            if let Some(context) = &error.context {
                println!("    Context: {context}");
            }
        }
        println!();
        println!("⚠️  Export completed with failures");
    } else {
        println!("✅ Export completed successfully!");
    }
}

/// Map a run to a process exit code
///
/// Without `strict` every run exits 0.
fn exit_code(summary: &ExportSummary, strict: bool) -> i32 {
    if !strict {
        return 0;
    }
    match summary.status {
        RunStatus::DatasetMissing => 2,
        _ if summary.workbooks_failed() > 0 => 1,
        _ => 0,
    }
}

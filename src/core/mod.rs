//! Core business logic for sheetcsv.
//!
//! # Export Workflow
//!
//! 1. **Validate**: Check the dataset folder exists
//! 2. **Discover**: List `.xlsx` files directly inside it
//! 3. **Lay out**: Create `<parent>/<workbook name>/` per workbook
//! 4. **Convert**: Decode each sheet and write `<sanitized name>.csv`
//! 5. **Report**: Log each step and return an [`export::ExportSummary`]
//!
//! A failing workbook is recorded and skipped; the run always continues
//! with the remaining workbooks.
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetcsv::core::export::{ExportOptions, Exporter};
//! use std::path::Path;
//!
//! let exporter = Exporter::xlsx(ExportOptions::default());
//! let summary = exporter.export(Path::new("dataset"));
//!
//! println!("Workbooks: {}", summary.workbooks_found());
//! println!("Failed: {}", summary.workbooks_failed());
//! ```

pub mod export;

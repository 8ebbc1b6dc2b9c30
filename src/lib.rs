// sheetcsv - Spreadsheet workbook to CSV exporter
// Copyright (c) 2025 Sheetcsv Contributors
// Licensed under the MIT License

//! # sheetcsv - Spreadsheet workbooks to per-sheet CSV
//!
//! sheetcsv scans a dataset folder for `.xlsx` workbooks and writes every
//! sheet of every workbook as its own CSV file, one output folder per
//! workbook.
//!
//! ## Overview
//!
//! For a layout like
//!
//! ```text
//! data/
//! ├── dataset/
//! │   ├── sales.xlsx        (sheets: "Q1/2024", "Summary")
//! │   └── inventory.xlsx    (sheets: "Stock")
//! ```
//!
//! an export of `data/dataset` produces
//!
//! ```text
//! data/
//! ├── sales/
//! │   ├── Q12024.csv
//! │   └── Summary.csv
//! └── inventory/
//!     └── Stock.csv
//! ```
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export orchestration (discovery, layout, per-workbook isolation)
//! - [`adapters`] - Workbook decoding and CSV encoding behind narrow traits
//! - [`domain`] - Core domain types, names and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging (the tool's status channel)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sheetcsv::core::export::{ExportOptions, Exporter};
//! use std::path::Path;
//!
//! let exporter = Exporter::xlsx(ExportOptions::default());
//! let summary = exporter.export(Path::new("dataset"));
//!
//! println!("Exported {} sheet(s)", summary.sheets_exported());
//! ```
//!
//! ## Error Handling
//!
//! An export never fails as a whole. A missing or empty dataset folder ends
//! the run early; a corrupt workbook is reported and skipped while the
//! remaining workbooks are still converted. Library operations that can fail
//! return [`domain::Result`] with a [`domain::SheetCsvError`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

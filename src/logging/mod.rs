//! Logging and observability
//!
//! All status output of an export run (discovery counts, per-workbook and
//! per-sheet progress, handled errors) goes through `tracing`. This module
//! wires up:
//! - Human-readable console output
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use sheetcsv::logging::init_logging;
//! use sheetcsv::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

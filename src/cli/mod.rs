//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for sheetcsv using clap.
//! Running the binary without a subcommand exports the default dataset
//! folder.

pub mod commands;

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};

/// sheetcsv - split spreadsheet workbooks into per-sheet CSV files
#[derive(Parser, Debug)]
#[command(name = "sheetcsv")]
#[command(version, about, long_about = None)]
#[command(author = "Sheetcsv Contributors")]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when the default
    /// file is absent)
    #[arg(short, long, env = "SHEETCSV_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHEETCSV_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to `export`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration path and whether the user named it explicitly
    pub fn config_path(&self) -> (&str, bool) {
        match &self.config {
            Some(path) => (path.as_str(), true),
            None => (DEFAULT_CONFIG_FILE, false),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every workbook in the dataset folder to per-sheet CSV files
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

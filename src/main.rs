// sheetcsv - Spreadsheet workbook to CSV exporter
// Copyright (c) 2025 Sheetcsv Contributors
// Licensed under the MIT License

use clap::Parser;
use sheetcsv::cli::commands::export::ExportArgs;
use sheetcsv::cli::{Cli, Commands};
use sheetcsv::config::{load_config_or_default, LoggingConfig, SheetCsvConfig};
use sheetcsv::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (config_path, explicit) = cli.config_path();
    let config = load_config_or_default(config_path, explicit);

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| {
            config
                .as_ref()
                .ok()
                .map(|c| c.application.log_level.clone())
        })
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sheetcsv starting");

    let exit_code = match execute_command(&cli, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(
    cli: &Cli,
    config: sheetcsv::domain::Result<SheetCsvConfig>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Some(Commands::ValidateConfig(args)) => args.execute(cli.config_path().0),
        Some(Commands::Init(args)) => args.execute(),
        Some(Commands::Export(args)) => run_export(args, config),
        None => run_export(&ExportArgs::default(), config),
    }
}

fn run_export(
    args: &ExportArgs,
    config: sheetcsv::domain::Result<SheetCsvConfig>,
) -> anyhow::Result<i32> {
    match config {
        Ok(config) => args.execute(&config),
        Err(e) => {
            tracing::error!(error = %e, "Configuration could not be loaded");
            eprintln!("Configuration error: {e}");
            Ok(2) // Configuration error exit code
        }
    }
}

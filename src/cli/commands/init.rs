//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::debug!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: sheetcsv validate-config");
                println!("  3. Run export: sheetcsv export [DATASET]");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration listing every key with its default
    fn sample_config() -> &'static str {
        r#"# sheetcsv configuration
# Every key is optional; the values below are the defaults.
# ${VAR_NAME} placeholders are replaced from the environment (and .env).

[application]
# trace, debug, info, warn, error
log_level = "info"

[export]
# Folder scanned for .xlsx workbooks when no DATASET argument is given.
# Each workbook's CSV files go to a sibling folder named after the workbook.
dataset_dir = "dataset"

# Read every sheet but write nothing
dry_run = false

# Exit with code 2 when the dataset folder is missing and 1 when any
# workbook failed
fail_on_error = false

[logging]
# JSON log file in addition to console output
local_enabled = false
local_path = "logs"
# daily, hourly, never
local_rotation = "daily"
"#
    }
}

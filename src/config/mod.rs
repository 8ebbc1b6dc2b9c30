//! Configuration management for sheetcsv.
//!
//! sheetcsv reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SHEETCSV_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation of every section
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetcsv::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sheetcsv.toml")?;
//! println!("Dataset folder: {}", config.export.dataset_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! dataset_dir = "${DATA_ROOT}/dataset"
//! dry_run = false
//! fail_on_error = false
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, ExportConfig, LoggingConfig, SheetCsvConfig};

//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SheetCsvConfig;
use crate::domain::errors::SheetCsvError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sheetcsv.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SheetCsvConfig
/// 4. Applies environment variable overrides (SHEETCSV_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sheetcsv::config::loader::load_config;
///
/// let config = load_config("sheetcsv.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SheetCsvConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SheetCsvError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SheetCsvError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SheetCsvConfig = toml::from_str(&contents)
        .map_err(|e| SheetCsvError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        SheetCsvError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// A missing file is only tolerated when `explicit` is false, i.e. when the
/// path is the implicit default rather than one the user asked for.
pub fn load_config_or_default(path: impl AsRef<Path>, explicit: bool) -> Result<SheetCsvConfig> {
    let path = path.as_ref();
    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = SheetCsvConfig::default();
        apply_env_overrides(&mut config);
        config.validate().map_err(|e| {
            SheetCsvError::Configuration(format!("Configuration validation failed: {}", e))
        })?;
        return Ok(config);
    }
    load_config(path)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SheetCsvError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(SheetCsvError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using SHEETCSV_* prefix
///
/// Environment variables follow the pattern: SHEETCSV_<SECTION>_<KEY>,
/// for example SHEETCSV_EXPORT_DATASET_DIR.
fn apply_env_overrides(config: &mut SheetCsvConfig) {
    if let Ok(val) = std::env::var("SHEETCSV_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("SHEETCSV_EXPORT_DATASET_DIR") {
        config.export.dataset_dir = val;
    }
    if let Ok(val) = std::env::var("SHEETCSV_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SHEETCSV_EXPORT_FAIL_ON_ERROR") {
        config.export.fail_on_error = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("SHEETCSV_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SHEETCSV_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SHEETCSV_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

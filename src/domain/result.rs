//! Result type alias for sheetcsv

use super::errors::SheetCsvError;

/// Result type alias for sheetcsv operations
///
/// # Examples
///
/// ```
/// use sheetcsv::domain::result::Result;
/// use sheetcsv::domain::errors::SheetCsvError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SheetCsvError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SheetCsvError>;

//! Domain models and types for sheetcsv.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Filesystem-facing names** ([`WorkbookName`], [`SanitizedSheetName`])
//! - **Decoded sheet contents** ([`SheetTable`])
//! - **Error types** ([`SheetCsvError`], [`WorkbookError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SheetCsvError>`]:
//!
//! ```rust
//! use sheetcsv::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = sheetcsv::config::load_config("sheetcsv.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod names;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use errors::{SheetCsvError, WorkbookError};
pub use names::{SanitizedSheetName, WorkbookName};
pub use result::Result;
pub use table::SheetTable;

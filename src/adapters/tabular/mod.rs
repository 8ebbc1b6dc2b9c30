//! Tabular I/O abstraction layer
//!
//! Trait-based seam between the exporter and the libraries that decode
//! workbooks and encode CSV, so the export logic can be exercised with
//! in-memory fakes.

pub mod traits;

pub use traits::{TableWriter, Workbook, WorkbookReader};

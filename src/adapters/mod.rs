//! External format integrations for sheetcsv.
//!
//! - [`tabular`] - Trait-based seam for reading workbooks and writing tables
//! - [`xlsx`] - Excel `.xlsx` decoding (calamine)
//! - [`csvfile`] - CSV encoding (csv)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with in-memory implementations.
//!
//! ```rust,no_run
//! use sheetcsv::adapters::csvfile::CsvTableWriter;
//! use sheetcsv::adapters::tabular::{TableWriter, WorkbookReader};
//! use sheetcsv::adapters::xlsx::XlsxReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workbook = XlsxReader::new().open(Path::new("dataset/sales.xlsx"))?;
//! for name in workbook.sheet_names() {
//!     let table = workbook.read_sheet(&name)?;
//!     CsvTableWriter::new().write_table(&table, Path::new("out.csv"))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod csvfile;
pub mod tabular;
pub mod xlsx;

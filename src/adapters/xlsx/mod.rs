//! Excel `.xlsx` workbook adapter
//!
//! Decodes workbooks with calamine and renders every cell to text, producing
//! [`crate::domain::SheetTable`] values.

pub mod cells;
pub mod reader;

pub use reader::{XlsxReader, XlsxWorkbook, XLSX_EXTENSION};

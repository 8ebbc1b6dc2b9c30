//! CSV file output adapter

pub mod writer;

pub use writer::CsvTableWriter;

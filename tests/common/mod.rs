//! Shared fixtures for integration tests
//!
//! Builds minimal but valid `.xlsx` packages (workbook, relationships and
//! one worksheet part per sheet, with inline strings) so tests can exercise
//! the real decoder without checked-in binary files.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A cell value in a fixture sheet
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

/// Text cell
pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

/// Numeric cell
pub fn num(n: f64) -> Cell {
    Cell::Number(n)
}

/// A named sheet with its rows
pub struct FixtureSheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl FixtureSheet {
    pub fn new(name: &str, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.to_string(),
            rows,
        }
    }
}

/// Temporary `<root>/dataset` folder; outputs land next to it in `<root>`
pub struct Workspace {
    pub root: TempDir,
    pub dataset: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let dataset = root.path().join("dataset");
        fs::create_dir(&dataset).unwrap();
        Self { root, dataset }
    }

    /// Path of an output directory or file relative to the root
    pub fn output(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a valid workbook into the dataset folder
    pub fn add_workbook(&self, file_name: &str, sheets: &[FixtureSheet]) -> PathBuf {
        let path = self.dataset.join(file_name);
        write_xlsx(&path, sheets);
        path
    }

    /// Write arbitrary bytes into the dataset folder
    pub fn add_file(&self, file_name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dataset.join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Sorted names of the entries directly under the root
    pub fn root_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Write an `.xlsx` package containing `sheets` to `path`
pub fn write_xlsx(path: &Path, sheets: &[FixtureSheet]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let mut put = |name: &str, body: String| {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    };

    put("[Content_Types].xml", content_types(sheets.len()));
    put("_rels/.rels", ROOT_RELS.to_string());
    put("xl/workbook.xml", workbook_xml(sheets));
    put("xl/_rels/workbook.xml.rels", workbook_rels(sheets.len()));
    for (index, sheet) in sheets.iter().enumerate() {
        put(
            &format!("xl/worksheets/sheet{}.xml", index + 1),
            worksheet_xml(&sheet.rows),
        );
    }

    zip.finish().unwrap();
}

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

fn content_types(sheet_count: usize) -> String {
    let mut overrides = String::from(
        r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    for index in 1..=sheet_count {
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{index}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/>{overrides}</Types>"#
    )
}

fn workbook_xml(sheets: &[FixtureSheet]) -> String {
    let entries: String = sheets
        .iter()
        .enumerate()
        .map(|(index, sheet)| {
            format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(&sheet.name),
                index + 1,
                index + 1
            )
        })
        .collect();
    format!(
        r#"{XML_DECL}
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{entries}</sheets></workbook>"#
    )
}

fn workbook_rels(sheet_count: usize) -> String {
    let entries: String = (1..=sheet_count)
        .map(|index| {
            format!(
                r#"<Relationship Id="rId{index}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{index}.xml"/>"#
            )
        })
        .collect();
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{entries}</Relationships>"#
    )
}

fn worksheet_xml(rows: &[Vec<Cell>]) -> String {
    let mut body = String::new();
    for (row_index, row) in rows.iter().enumerate() {
        let row_number = row_index + 1;
        body.push_str(&format!(r#"<row r="{row_number}">"#));
        for (col_index, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(col_index), row_number);
            match cell {
                Cell::Text(s) => body.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    escape(s)
                )),
                Cell::Number(n) => {
                    body.push_str(&format!(r#"<c r="{reference}"><v>{n}</v></c>"#))
                }
                Cell::Bool(b) => body.push_str(&format!(
                    r#"<c r="{reference}" t="b"><v>{}</v></c>"#,
                    u8::from(*b)
                )),
                Cell::Empty => {}
            }
        }
        body.push_str("</row>");
    }
    format!(
        r#"{XML_DECL}
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{body}</sheetData></worksheet>"#
    )
}

/// Spreadsheet column letters for a zero-based index (0 -> A, 26 -> AA)
fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

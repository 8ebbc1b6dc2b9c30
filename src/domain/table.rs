//! In-memory sheet table
//!
//! A [`SheetTable`] is the decoded contents of one sheet: a header row of
//! column labels followed by data rows, every cell already rendered to text.
//! It is the only thing that crosses the seam between workbook decoding and
//! CSV encoding.

use std::collections::HashMap;

/// Decoded sheet contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Builds a table from raw rows, treating the first row as the header
    ///
    /// Every row is padded with empty cells to the width of the widest row,
    /// and empty header cells are labelled `Unnamed: <column index>`.
    /// Repeated labels get a `.<n>` suffix (`a`, `a.1`, `a.2`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetcsv::domain::SheetTable;
    ///
    /// let table = SheetTable::from_rows(vec![
    ///     vec!["a".to_string(), String::new()],
    ///     vec!["1".to_string()],
    /// ]);
    /// assert_eq!(table.headers(), ["a", "Unnamed: 1"]);
    /// assert_eq!(table.rows()[0], ["1", ""]);
    /// ```
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut rows = rows.into_iter().map(|mut row| {
            row.resize(width, String::new());
            row
        });

        let headers = match rows.next() {
            Some(header_row) => header_row
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    if label.is_empty() {
                        format!("Unnamed: {index}")
                    } else {
                        label
                    }
                })
                .collect(),
            None => Vec::new(),
        };
        let headers = dedup_labels(headers);

        Self {
            headers,
            rows: rows.collect(),
        }
    }

    /// Column labels
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, excluding the header
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when the sheet held no cells at all
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Header followed by data rows, in output order
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.headers.as_slice())
            .filter(|headers| !headers.is_empty())
            .chain(self.rows.iter().map(Vec::as_slice))
    }
}

/// Suffix repeated labels with `.<n>`, re-suffixing when the result is taken too
fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(labels.len());

    for label in labels {
        let mut label = label;
        let mut seen = counts.get(&label).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(label.clone(), seen + 1);
            label = format!("{label}.{seen}");
            seen = counts.get(&label).copied().unwrap_or(0);
        }
        counts.insert(label.clone(), seen + 1);
        result.push(label);
    }

    result
}

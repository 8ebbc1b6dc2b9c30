//! Cell rendering
//!
//! Turns decoded cell values into the text written to CSV.

use calamine::{Data, DataType};

/// Format used for date and date-time cells
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one cell as CSV field text
///
/// Numbers use shortest round-trip formatting, so `1.0` renders as `1`.
/// Booleans render as `True`/`False`, error cells as their Excel literal.
pub fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        #[allow(unreachable_patterns)]
        _ => cell.to_string(),
    }
}

/// Render a row of cells
pub fn render_row(row: &[Data]) -> Vec<String> {
    row.iter().map(render_cell).collect()
}

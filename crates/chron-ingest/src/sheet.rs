//! Turns a raw grid into header-keyed rows.

use chron_model::{CellValue, ParsedRow};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::header::{HEADER_SCAN_LIMIT, header_labels, locate_header_within};

/// Options for sheet parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Rows inspected when looking for the header row.
    pub header_scan_limit: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_scan_limit: HEADER_SCAN_LIMIT,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_scan_limit(mut self, limit: usize) -> Self {
        self.header_scan_limit = limit;
        self
    }
}

/// Parsed rows plus where their header came from.
#[derive(Debug, Clone, Default)]
pub struct SheetRows {
    pub header_index: usize,
    /// False when no anchor label was found and row 0 was assumed.
    pub anchored: bool,
    pub headers: Vec<String>,
    pub rows: Vec<ParsedRow>,
}

/// Materializes every row strictly below `header_index`.
///
/// Missing trailing cells are blank, cells beyond the header width are
/// dropped, and rows with no non-empty cell are skipped.
pub fn materialize_rows(grid: &[Vec<CellValue>], header_index: usize) -> Vec<ParsedRow> {
    let Some(header_row) = grid.get(header_index) else {
        return Vec::new();
    };
    let headers = header_labels(header_row);
    grid.iter()
        .skip(header_index + 1)
        .filter_map(|record| build_row(&headers, record))
        .collect()
}

fn build_row(headers: &[String], record: &[CellValue]) -> Option<ParsedRow> {
    let mut row = ParsedRow::with_capacity(headers.len());
    for (idx, label) in headers.iter().enumerate() {
        let value = record.get(idx).cloned().unwrap_or_default();
        row.insert(label.as_str(), value);
    }
    row.has_data().then_some(row)
}

/// Locates the header row and materializes the rows below it.
pub fn parse_sheet(grid: &[Vec<CellValue>], options: &IngestOptions) -> SheetRows {
    if grid.is_empty() {
        return SheetRows::default();
    }
    let location = locate_header_within(grid, options.header_scan_limit);
    if location.anchored {
        debug!(header_index = location.index, "header row located");
    } else {
        warn!(
            scan_limit = options.header_scan_limit,
            "no anchor label found; using first row as header"
        );
    }
    let headers = header_labels(&grid[location.index]);
    let rows = materialize_rows(grid, location.index);
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "materialized sheet rows"
    );
    SheetRows {
        header_index: location.index,
        anchored: location.anchored,
        headers,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|cell| CellValue::text(*cell)).collect()
    }

    #[test]
    fn parses_rows_below_header() {
        let grid = vec![
            text_row(&["Export i dates 2024-05-01"]),
            text_row(&["Numri R", "Lloji DAV", ""]),
            text_row(&["R1", "EX", "x"]),
            text_row(&["", " ", ""]),
            text_row(&["R2"]),
            text_row(&["R3", "IM", "y", "overflow"]),
        ];
        let sheet = parse_sheet(&grid, &IngestOptions::default());

        assert_eq!(sheet.header_index, 1);
        assert!(sheet.anchored);
        assert_eq!(sheet.headers, vec!["Numri R", "Lloji DAV", "__COL_2"]);
        assert_eq!(sheet.rows.len(), 3);

        let r2 = &sheet.rows[1];
        assert_eq!(r2.get("Numri R"), Some(&CellValue::text("R2")));
        assert_eq!(r2.get("Lloji DAV"), Some(&CellValue::Blank));

        let r3 = &sheet.rows[2];
        assert_eq!(r3.len(), 3);
        assert_eq!(r3.get("__COL_2"), Some(&CellValue::text("y")));
    }

    #[test]
    fn scan_limit_is_configurable() {
        let grid = vec![
            text_row(&["title"]),
            text_row(&["Numri R"]),
            text_row(&["R1"]),
        ];
        let sheet = parse_sheet(&grid, &IngestOptions::new().with_header_scan_limit(1));
        assert_eq!(sheet.header_index, 0);
        assert!(!sheet.anchored);
        assert_eq!(sheet.rows.len(), 2);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let sheet = parse_sheet(&[], &IngestOptions::default());
        assert!(sheet.rows.is_empty());
        assert!(materialize_rows(&[], 0).is_empty());
    }
}

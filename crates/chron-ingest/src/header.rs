//! Header row detection inside noisy leading content.
//!
//! Export tools often prepend titles, filters or blank lines before the
//! real header. The header is the first row (within a scan window) that
//! contains one of a few anchor labels.

use chron_map::normalize_key;
use chron_model::CellValue;

/// Labels that only ever appear in the real header row.
pub const ANCHOR_LABELS: [&str; 5] = [
    "Lloji DAV",
    "Numri R",
    "Tipi procedures",
    "Kodi 8 shifror",
    "Gds Ds3",
];

/// Rows inspected when looking for the header.
pub const HEADER_SCAN_LIMIT: usize = 30;

/// Prefix for columns whose header cell is blank.
pub const PLACEHOLDER_PREFIX: &str = "__COL_";

/// Where the header was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    pub index: usize,
    /// False when no anchor matched and row 0 was assumed.
    pub anchored: bool,
}

fn anchor_keys() -> Vec<String> {
    ANCHOR_LABELS.iter().map(|label| normalize_key(label)).collect()
}

fn row_has_anchor(cells: &[CellValue], anchors: &[String]) -> bool {
    cells
        .iter()
        .map(|cell| normalize_key(&cell.to_string()))
        .any(|key| anchors.contains(&key))
}

/// True when any cell of `cells` is an anchor label.
pub fn looks_like_header_row(cells: &[CellValue]) -> bool {
    row_has_anchor(cells, &anchor_keys())
}

/// First row within `scan_limit` rows that contains an anchor label.
pub fn find_header_row(grid: &[Vec<CellValue>], scan_limit: usize) -> Option<usize> {
    let anchors = anchor_keys();
    grid.iter()
        .take(scan_limit)
        .position(|row| row_has_anchor(row, &anchors))
}

/// Locates the header, falling back to row 0 when nothing matches.
pub fn locate_header_within(grid: &[Vec<CellValue>], scan_limit: usize) -> HeaderLocation {
    match find_header_row(grid, scan_limit) {
        Some(index) => HeaderLocation {
            index,
            anchored: true,
        },
        None => HeaderLocation {
            index: 0,
            anchored: false,
        },
    }
}

/// Header index using the default scan window.
pub fn locate_header(grid: &[Vec<CellValue>]) -> usize {
    locate_header_within(grid, HEADER_SCAN_LIMIT).index
}

/// Trimmed header labels; blank labels become `__COL_<n>`.
pub fn header_labels(row: &[CellValue]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let label = cell.to_string();
            let label = label.trim();
            if label.is_empty() {
                format!("{PLACEHOLDER_PREFIX}{idx}")
            } else {
                label.to_string()
            }
        })
        .collect()
}

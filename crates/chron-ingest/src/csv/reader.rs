use std::fs::File;
use std::io::Read;
use std::path::Path;

use chron_model::{CellValue, RawGrid};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

pub const DEFAULT_DELIMITER: u8 = b',';

fn normalize_cell(raw: &str) -> CellValue {
    let value = raw.trim_start_matches('\u{feff}');
    if value.is_empty() {
        CellValue::Blank
    } else {
        CellValue::text(value)
    }
}

/// Reads a delimited text file into a raw grid with no header assumed.
///
/// Rows may have different widths. Rows whose cells are all blank are
/// dropped, matching what spreadsheet readers report.
pub fn read_csv_grid(path: &Path, delimiter: u8) -> Result<RawGrid> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_grid_from_reader(file, path, delimiter)
}

/// Same as [`read_csv_grid`] over any reader; `path` is only used in errors.
pub fn read_csv_grid_from_reader<R: Read>(
    reader: R,
    path: &Path,
    delimiter: u8,
) -> Result<RawGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);
    let mut grid = RawGrid::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<CellValue> = record.iter().map(normalize_cell).collect();
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        grid.push(row);
    }
    debug!(path = %path.display(), rows = grid.len(), "read csv grid");
    Ok(grid)
}

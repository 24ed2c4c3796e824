//! Chronology sheet ingestion.
//!
//! Locates the real header row of a raw cell grid, materializes the rows
//! below it into header-keyed [`ParsedRow`](chron_model::ParsedRow)s, and
//! reads delimited text files into raw grids.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use chron_ingest::{IngestOptions, parse_sheet, read_csv_grid, DEFAULT_DELIMITER};
//!
//! let grid = read_csv_grid(Path::new("chronologies.csv"), DEFAULT_DELIMITER)?;
//! let sheet = parse_sheet(&grid, &IngestOptions::default());
//! println!("header at row {}, {} data rows", sheet.header_index, sheet.rows.len());
//! ```

mod csv;
mod error;
pub mod header;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{DEFAULT_DELIMITER, read_csv_grid, read_csv_grid_from_reader};

// === Header Detection ===
pub use header::{
    ANCHOR_LABELS, HEADER_SCAN_LIMIT, HeaderLocation, find_header_row, header_labels,
    locate_header, locate_header_within, looks_like_header_row,
};

// === Row Materialization ===
pub use sheet::{IngestOptions, SheetRows, materialize_rows, parse_sheet};

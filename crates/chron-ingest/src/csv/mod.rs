//! CSV reading utilities.

mod reader;

pub use reader::{DEFAULT_DELIMITER, read_csv_grid, read_csv_grid_from_reader};

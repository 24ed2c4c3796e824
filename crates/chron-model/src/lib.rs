//! Data model for chronology sheet ingestion.
//!
//! - **cell**: scalar cell values and the raw grid alias
//! - **row**: header-keyed parsed rows
//! - **code**: the export/import category
//! - **fields**: canonical source fields and fixed output columns
//! - **record**: typed canonical output rows

pub mod cell;
pub mod code;
pub mod fields;
pub mod record;
pub mod row;

pub use cell::{CellValue, RawGrid};
pub use code::Code;
pub use fields::{CanonicalField, EXPORT_COLUMNS, IMPORT_COLUMNS, OutputColumn};
pub use record::{CanonicalRow, ExportRecord, ImportRecord};
pub use row::ParsedRow;

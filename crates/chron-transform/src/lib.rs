//! Chronology report transformation.
//!
//! This crate turns header-keyed sheet rows into report rows:
//!
//! - **code**: export/import classification of request and cell values
//! - **transform**: field resolution, filtering, derivation and projection
//! - **report**: summary block, sizing and preview rules of the report sheet

pub mod code;
pub mod report;
pub mod transform;

pub use code::{classify_cell, classify_text, parse_requested_mode};
pub use report::{ReportSheet, preview, preview_limit, report_file_name};
pub use transform::{
    TransformOutput, TransformReport, derive_kodi4, transform, transform_with_report,
};

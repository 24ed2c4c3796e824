use std::path::PathBuf;

use chron_model::Code;
use chron_transform::TransformReport;

#[derive(Debug)]
pub struct TransformResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Code,
    pub header_index: usize,
    pub anchored: bool,
    pub report: TransformReport,
}

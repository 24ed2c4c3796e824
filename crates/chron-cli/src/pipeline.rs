//! Load, resolve and transform stages shared by the CLI commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chron_ingest::{IngestOptions, SheetRows, parse_sheet, read_csv_grid};
use chron_model::Code;
use chron_transform::{TransformOutput, transform_with_report};
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Reads `path` and materializes its data rows.
///
/// # Errors
///
/// Fails when the file cannot be read or when no data row remains below
/// the detected header.
pub fn load_sheet(path: &Path, delimiter: u8, options: &IngestOptions) -> Result<SheetRows> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let grid = read_csv_grid(path, delimiter)
        .with_context(|| format!("read sheet: {}", path.display()))?;
    let sheet = parse_sheet(&grid, options);
    if sheet.rows.is_empty() {
        bail!(
            "No data rows detected. Make sure the sheet contains the expected headers and values."
        );
    }
    info!(
        header_row = sheet.header_index,
        rows = sheet.rows.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sheet loaded"
    );
    Ok(sheet)
}

/// Runs the transform over a loaded sheet.
pub fn run_transform(sheet: &SheetRows, mode: Code, extra: Option<&str>) -> TransformOutput {
    let span = info_span!("transform", mode = %mode);
    let _guard = span.enter();
    // The auxiliary value only applies to export reports.
    let extra = match mode {
        Code::Ex => extra,
        Code::Im => None,
    };
    if let Some(value) = extra {
        debug!(vlere_poliuretan = redact_value(value), "auxiliary value supplied");
    }
    transform_with_report(&sheet.rows, mode, extra)
}

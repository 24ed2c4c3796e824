//! Report writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chron_model::CanonicalRow;
use chron_transform::ReportSheet;
use csv::WriterBuilder;

/// Writes the sheet layout (summary, blank line, header, rows) as CSV.
pub fn write_report_csv<W: Write>(writer: W, sheet: &ReportSheet) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);
    for line in sheet.lines() {
        if line.is_empty() {
            writer.write_record(["", ""]).context("write separator")?;
        } else {
            writer.write_record(&line).context("write record")?;
        }
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

/// Writes canonical rows as a JSON array of header-keyed objects.
pub fn write_rows_json<W: Write>(writer: W, rows: &[CanonicalRow]) -> Result<()> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, rows).context("serialize rows")?;
    writer.write_all(b"\n").context("write newline")?;
    writer.flush().context("flush json")?;
    Ok(())
}

/// Creates `path` and buffers writes to it.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

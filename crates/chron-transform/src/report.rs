//! Layout of the generated report sheet.
//!
//! The sheet starts with a short summary block, then a blank line, the
//! fixed header row of the mode and one line per canonical row. Writers
//! (spreadsheet, CSV, terminal) render this layout as they see fit.

use chrono::NaiveDate;
use chron_model::{CanonicalRow, Code, OutputColumn};
use serde::Serialize;

pub const REPORT_TITLE: &str = "Chronologies";
pub const WIDTH_MIN: usize = 12;
pub const WIDTH_MAX: usize = 40;
/// Rows sampled when sizing columns.
pub const WIDTH_SAMPLE_ROWS: usize = 200;
pub const PREVIEW_DEFAULT_LIMIT: usize = 20;
pub const PREVIEW_MAX_LIMIT: usize = 100;

/// Columns rendered center-aligned.
pub const CENTERED_COLUMNS: [OutputColumn; 10] = [
    OutputColumn::KodiR,
    OutputColumn::TipiProcedures,
    OutputColumn::Kodi4,
    OutputColumn::Palet,
    OutputColumn::CmimiArtikullitMonedhe,
    OutputColumn::ShumaPaguar,
    OutputColumn::PeshaNeto,
    OutputColumn::VleraStatistikore,
    OutputColumn::VleraFatures,
    OutputColumn::TranspBrendshemEur,
];

pub fn is_centered(column: OutputColumn) -> bool {
    CENTERED_COLUMNS.contains(&column)
}

/// `chronologies_<EXPORT|IMPORT>_<YYYY-MM-DD>.<extension>`
pub fn report_file_name(code: Code, date: NaiveDate, extension: &str) -> String {
    format!(
        "chronologies_{}_{}.{}",
        code.report_label(),
        date.format("%Y-%m-%d"),
        extension
    )
}

/// Key/value lines printed above the table.
pub fn summary_rows(code: Code, row_count: usize) -> Vec<[String; 2]> {
    vec![
        ["Raporti".to_string(), REPORT_TITLE.to_string()],
        ["Lloji DAV".to_string(), code.report_label().to_string()],
        ["Rreshta të përfshira".to_string(), row_count.to_string()],
    ]
}

/// Character widths per column, clamped to [`WIDTH_MIN`, `WIDTH_MAX`].
pub fn column_widths(code: Code, rows: &[CanonicalRow]) -> Vec<usize> {
    code.output_columns()
        .iter()
        .map(|column| {
            let longest = rows
                .iter()
                .take(WIDTH_SAMPLE_ROWS)
                .map(|row| row.text(*column).chars().count())
                .fold(column.header().chars().count().max(WIDTH_MIN), usize::max);
            (longest + 2).clamp(WIDTH_MIN, WIDTH_MAX)
        })
        .collect()
}

/// Clamps a requested preview size to 1..=100, defaulting to 20.
pub fn preview_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(PREVIEW_DEFAULT_LIMIT)
        .clamp(1, PREVIEW_MAX_LIMIT)
}

/// Leading rows shown in a preview.
pub fn preview(rows: &[CanonicalRow], requested: Option<usize>) -> &[CanonicalRow] {
    let limit = preview_limit(requested);
    &rows[..rows.len().min(limit)]
}

/// A fully laid out report sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSheet {
    pub name: &'static str,
    pub summary: Vec<[String; 2]>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<usize>,
}

impl ReportSheet {
    pub fn build(code: Code, rows: &[CanonicalRow]) -> Self {
        let columns = code.output_columns();
        Self {
            name: code.report_label(),
            summary: summary_rows(code, rows.len()),
            headers: columns.iter().map(|column| column.header()).collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|column| row.text(*column)).collect())
                .collect(),
            widths: column_widths(code, rows),
        }
    }

    /// Zero-based line of the header row within [`ReportSheet::lines`].
    pub fn header_line(&self) -> usize {
        self.summary.len() + 1
    }

    /// Every line of the sheet: summary, blank separator, header, rows.
    pub fn lines(&self) -> Vec<Vec<String>> {
        let mut lines: Vec<Vec<String>> = self.summary.iter().map(|pair| pair.to_vec()).collect();
        lines.push(Vec::new());
        lines.push(self.headers.iter().map(ToString::to_string).collect());
        lines.extend(self.rows.iter().cloned());
        lines
    }
}

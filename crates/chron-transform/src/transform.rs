//! Canonical row projection.
//!
//! Resolves the canonical fields once per call, keeps the rows whose
//! declaration type matches the requested mode, derives the 4-digit code
//! and emits typed records in the mode's fixed column order.

use chron_map::ColumnMapping;
use chron_model::{
    CanonicalField, CanonicalRow, CellValue, Code, ExportRecord, ImportRecord, ParsedRow,
};
use tracing::{debug, info, trace};

use crate::code::classify_cell;

/// Counts gathered during one transform call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Rows inspected.
    pub scanned: usize,
    /// Rows emitted.
    pub kept: usize,
    /// Rows whose declaration type named neither category.
    pub unclassified: usize,
    /// Rows belonging to the other category.
    pub other_mode: usize,
    /// Fields with no matching column in this file.
    pub unresolved: Vec<CanonicalField>,
}

/// Rows produced by a transform call plus its counts.
#[derive(Debug, Clone, Default)]
pub struct TransformOutput {
    pub rows: Vec<CanonicalRow>,
    pub report: TransformReport,
}

/// First four digits of `value` once every non-digit is removed.
///
/// Shorter digit runs are returned as they are, without padding.
pub fn derive_kodi4(value: &CellValue) -> String {
    value
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .take(4)
        .collect()
}

/// Transforms parsed rows into canonical rows for `mode`.
///
/// `extra` fills the "Vlere poliuretan" column of export rows and is
/// ignored for imports.
pub fn transform(rows: &[ParsedRow], mode: Code, extra: Option<&str>) -> Vec<CanonicalRow> {
    transform_with_report(rows, mode, extra).rows
}

/// Like [`transform`], also returning what was kept, skipped and unresolved.
pub fn transform_with_report(
    rows: &[ParsedRow],
    mode: Code,
    extra: Option<&str>,
) -> TransformOutput {
    if rows.is_empty() {
        return TransformOutput::default();
    }

    let mapping = ColumnMapping::for_rows(rows);
    let mut report = TransformReport {
        scanned: rows.len(),
        unresolved: mapping.unresolved().to_vec(),
        ..TransformReport::default()
    };
    let mut out = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let lloji_dav = mapping.value(row, CanonicalField::LlojiDav);
        match classify_cell(&lloji_dav) {
            None => {
                report.unclassified += 1;
                trace!(row = idx, "skipping row without a declaration type");
                continue;
            }
            Some(code) if code != mode => {
                report.other_mode += 1;
                continue;
            }
            Some(_) => {}
        }

        let base = ImportRecord {
            kodi_r: mapping.value(row, CanonicalField::KodiR),
            tipi_procedures: mapping.value(row, CanonicalField::TipiProcedures),
            lloji_dav,
            kodi_4_shifror: CellValue::Text(derive_kodi4(
                &mapping.value(row, CanonicalField::Kodi8),
            )),
            pershkrim: mapping.value(row, CanonicalField::GdsDs3),
            palet: mapping.value(row, CanonicalField::Palet),
            cmimi_artikullit_monedhe: mapping.value(row, CanonicalField::CmimiArtMonedhe),
            shuma_paguar: mapping.value(row, CanonicalField::ShumaPaguar),
            pesha_neto_kg: mapping.value(row, CanonicalField::PeshaNeto),
            vlera_statistikore: mapping.value(row, CanonicalField::VleraStat),
            vlera_e_fatures: mapping.value(row, CanonicalField::VleraFatures),
            transp_brendshem_eur: mapping.value(row, CanonicalField::TranspBrendshemEur),
        };

        let record = match mode {
            Code::Im => CanonicalRow::Import(base),
            Code::Ex => CanonicalRow::Export(ExportRecord {
                base,
                emri_eksportuesit: mapping.value(row, CanonicalField::EmriEksportuesit),
                vlere_poliuretan: CellValue::text(extra.unwrap_or_default()),
                vlera_e_mallit: CellValue::text(""),
            }),
        };
        out.push(record);
    }

    report.kept = out.len();
    debug!(
        mode = %mode,
        unclassified = report.unclassified,
        other_mode = report.other_mode,
        "filtered rows"
    );
    info!(mode = %mode, scanned = report.scanned, kept = report.kept, "transformed rows");

    TransformOutput { rows: out, report }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kodi4_takes_leading_digits() {
        assert_eq!(derive_kodi4(&CellValue::text("AB-1234-56")), "1234");
        assert_eq!(derive_kodi4(&CellValue::text("8471.30.00")), "8471");
        assert_eq!(derive_kodi4(&CellValue::text("x9-8")), "98");
        assert_eq!(derive_kodi4(&CellValue::Number(84713000.0)), "8471");
        assert_eq!(derive_kodi4(&CellValue::Blank), "");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let output = transform_with_report(&[], Code::Ex, Some("5"));
        assert!(output.rows.is_empty());
        assert_eq!(output.report, TransformReport::default());
    }
}

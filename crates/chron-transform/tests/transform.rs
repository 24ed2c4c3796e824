//! End-to-end tests for chronology transforms.

use chron_model::{CanonicalField, CanonicalRow, CellValue, Code, OutputColumn, ParsedRow};
use chron_transform::{ReportSheet, classify_cell, transform, transform_with_report};
use proptest::prelude::*;

fn row(cells: &[(&str, &str)]) -> ParsedRow {
    cells
        .iter()
        .map(|(label, value)| (*label, CellValue::text(*value)))
        .collect()
}

fn sample_rows() -> Vec<ParsedRow> {
    vec![
        row(&[
            ("Numri R", "R-1"),
            ("Lloji DAV", "EX"),
            ("Kodi 8 shifror", "AB-1234-56"),
            ("Emri eksportuesit", "Alba Trade"),
        ]),
        row(&[
            ("Numri R", "R-2"),
            ("Lloji DAV", "IM"),
            ("Kodi 8 shifror", "8471.30.00"),
            ("Emri eksportuesit", "Other"),
        ]),
    ]
}

#[test]
fn export_mode_keeps_only_export_rows() {
    let out = transform(&sample_rows(), Code::Ex, Some("12.5"));

    assert_eq!(out.len(), 1);
    let first = &out[0];
    assert_eq!(first.code(), Code::Ex);
    assert_eq!(first.cells().count(), 15);
    assert_eq!(first.text(OutputColumn::KodiR), "R-1");
    assert_eq!(first.text(OutputColumn::LlojiDav), "EX");
    assert_eq!(first.text(OutputColumn::Kodi4), "1234");
    assert_eq!(first.text(OutputColumn::EmriEksportuesit), "Alba Trade");
    assert_eq!(first.text(OutputColumn::VlerePoliuretan), "12.5");
    assert_eq!(first.text(OutputColumn::VleraMallit), "");
    // Unresolved fields are empty, never missing.
    assert_eq!(first.get(OutputColumn::Palet), Some(&CellValue::Blank));
    assert_eq!(first.text(OutputColumn::TranspBrendshemEur), "");
}

#[test]
fn import_mode_uses_twelve_columns() {
    let out = transform(&sample_rows(), Code::Im, Some("ignored"));

    assert_eq!(out.len(), 1);
    assert!(matches!(out[0], CanonicalRow::Import(_)));
    assert_eq!(out[0].cells().count(), 12);
    assert_eq!(out[0].text(OutputColumn::Kodi4), "8471");
    assert!(out[0].get(OutputColumn::VlerePoliuretan).is_none());
}

#[test]
fn missing_extra_value_is_empty() {
    let out = transform(&sample_rows(), Code::Ex, None);
    assert_eq!(out[0].text(OutputColumn::VlerePoliuretan), "");
}

#[test]
fn unclassified_rows_are_excluded() {
    let rows = vec![
        row(&[("Numri R", "R-1"), ("Lloji DAV", "")]),
        row(&[("Numri R", "R-2"), ("Lloji DAV", "XYZ")]),
        row(&[("Numri R", "R-3"), ("Lloji DAV", "eksport")]),
    ];
    let output = transform_with_report(&rows, Code::Ex, None);

    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.rows[0].text(OutputColumn::KodiR), "R-3");
    assert_eq!(output.report.scanned, 3);
    assert_eq!(output.report.kept, 1);
    assert_eq!(output.report.unclassified, 2);
    assert_eq!(output.report.other_mode, 0);
}

#[test]
fn missing_declaration_column_excludes_every_row() {
    let rows = vec![row(&[("Numri R", "R-1")]), row(&[("Numri R", "R-2")])];
    let output = transform_with_report(&rows, Code::Im, None);

    assert!(output.rows.is_empty());
    assert_eq!(output.report.unclassified, 2);
    assert!(output.report.unresolved.contains(&CanonicalField::LlojiDav));
}

#[test]
fn row_order_is_preserved() {
    let rows = vec![
        row(&[("Numri R", "r1"), ("Lloji DAV", "IM")]),
        row(&[("Numri R", "skip"), ("Lloji DAV", "EX")]),
        row(&[("Numri R", "r2"), ("Lloji DAV", "import")]),
        row(&[("Numri R", "r3"), ("Lloji DAV", "Importi")]),
    ];
    let keys: Vec<String> = transform(&rows, Code::Im, None)
        .iter()
        .map(|r| r.text(OutputColumn::KodiR))
        .collect();
    assert_eq!(keys, vec!["r1", "r2", "r3"]);
}

#[test]
fn resolves_variant_headers() {
    let rows = vec![row(&[
        ("NUMRI-R", "R-9"),
        ("Lloji DAV (data e faturës)", "EX"),
        ("Pershkrimi i mallit", "Pompa uji"),
        ("Tar Sup Qty1", "4"),
        ("transp i brend ne leke", "120"),
    ])];
    let out = transform(&rows, Code::Ex, None);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text(OutputColumn::KodiR), "R-9");
    assert_eq!(out[0].text(OutputColumn::Pershkrim), "Pompa uji");
    assert_eq!(out[0].text(OutputColumn::Palet), "4");
    assert_eq!(out[0].text(OutputColumn::TranspBrendshemEur), "120");
}

#[test]
fn transform_is_deterministic() {
    let rows = sample_rows();
    assert_eq!(
        transform(&rows, Code::Ex, Some("1")),
        transform(&rows, Code::Ex, Some("1"))
    );
}

#[test]
fn report_sheet_layout() {
    let out = transform(&sample_rows(), Code::Im, None);
    let sheet = ReportSheet::build(Code::Im, &out);

    assert_eq!(sheet.name, "IMPORT");
    assert_eq!(sheet.header_line(), 4);
    let rendered: Vec<String> = sheet.lines().iter().map(|line| line.join("|")).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    Raporti|Chronologies
    Lloji DAV|IMPORT
    Rreshta të përfshira|1

    Kodi R|Tipi procedures|Lloji DAV (data e fatures)|kodi 4 shifror|pershkrim|Palet|Cmimi artikullit monedhe|Shuma paguar|Pesha neto kg|Vlera statistikore|Vlera e Fatures|transp i brendshem (EUR)
    R-2||IM|8471||||||||
    ");
}

proptest! {
    #[test]
    fn classification_is_total(value in "\\PC{0,24}") {
        let code = classify_cell(&CellValue::text(value));
        prop_assert!(matches!(code, None | Some(Code::Ex) | Some(Code::Im)));
    }

    #[test]
    fn output_rows_always_carry_every_column(
        codes in prop::collection::vec(prop_oneof![Just("EX"), Just("IM"), Just(""), Just("??")], 0..12),
        export in any::<bool>(),
    ) {
        let rows: Vec<ParsedRow> = codes
            .iter()
            .map(|code| row(&[("Lloji DAV", *code), ("Kodi 8 shifror", "12")]))
            .collect();
        let mode = if export { Code::Ex } else { Code::Im };
        let out = transform(&rows, mode, None);
        let expected = codes.iter().filter(|code| **code == mode.as_str()).count();
        prop_assert_eq!(out.len(), expected);
        for canonical in &out {
            prop_assert_eq!(canonical.cells().count(), mode.output_columns().len());
            prop_assert_eq!(canonical.text(OutputColumn::Kodi4), "12");
        }
    }
}

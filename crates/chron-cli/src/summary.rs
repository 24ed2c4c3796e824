use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use chron_ingest::SheetRows;
use chron_map::{ColumnMapping, MatchKind};
use chron_model::{CanonicalField, CanonicalRow, Code};
use chron_transform::ReportSheet;
use chron_transform::report::{is_centered, summary_rows};

use crate::types::TransformResult;

pub fn print_summary(result: &TransformResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    if !result.anchored {
        println!("Header: not found, first row used");
    }

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Header row"),
        Cell::new(result.header_index + 1),
    ]);
    table.add_row(vec![Cell::new("Scanned"), Cell::new(report.scanned)]);
    table.add_row(vec![
        Cell::new(format!("Other than {}", result.mode.report_label())),
        count_cell(report.other_mode, Color::DarkGrey),
    ]);
    table.add_row(vec![
        Cell::new("Without declaration type"),
        count_cell(report.unclassified, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new(result.mode.report_label())
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.kept).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !report.unresolved.is_empty() {
        let ids: Vec<&str> = report.unresolved.iter().map(|field| field.id()).collect();
        println!("Missing columns (left empty): {}", ids.join(", "));
    }
}

pub fn print_preview(mode: Code, rows: &[CanonicalRow], total: usize) {
    for [key, value] in summary_rows(mode, total) {
        println!("{key}: {value}");
    }
    let sheet = ReportSheet::build(mode, rows);
    println!("{}", preview_table(mode, &sheet));
    if rows.len() < total {
        println!("Showing {} of {} rows", rows.len(), total);
    }
}

fn preview_table(mode: Code, sheet: &ReportSheet) -> Table {
    let mut table = Table::new();
    table.set_header(
        sheet
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_constraints(width_constraints(&sheet.widths));
    for (idx, column) in mode.output_columns().iter().enumerate() {
        if is_centered(*column) {
            align_column(&mut table, idx, CellAlignment::Center);
        }
    }
    for row in &sheet.rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

/// Caps each preview column at the width the report sheet would give it.
fn width_constraints(widths: &[usize]) -> Vec<ColumnConstraint> {
    widths
        .iter()
        .map(|width| {
            let width = u16::try_from(*width).unwrap_or(u16::MAX);
            ColumnConstraint::UpperBoundary(Width::Fixed(width))
        })
        .collect()
}

pub fn print_columns(sheet: &SheetRows, mapping: &ColumnMapping) {
    println!(
        "Header row: {}{}",
        sheet.header_index + 1,
        if sheet.anchored { "" } else { " (assumed)" }
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in CanonicalField::ALL {
        let row = match mapping.resolved(field) {
            Some(resolved) => vec![
                Cell::new(field.id()),
                Cell::new(&resolved.column),
                match resolved.kind {
                    MatchKind::Exact => Cell::new(resolved.kind.as_str()).fg(Color::Green),
                    MatchKind::Fuzzy => Cell::new(resolved.kind.as_str()).fg(Color::Yellow),
                },
            ],
            None => vec![
                Cell::new(field.id()),
                dim_cell("-"),
                Cell::new("missing").fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use chron_model::{CellValue, ImportRecord};
    use chron_transform::report::WIDTH_MAX;

    use super::*;

    #[test]
    fn preview_columns_follow_report_widths() {
        let rows = vec![CanonicalRow::Import(ImportRecord {
            kodi_r: CellValue::text("R-1"),
            pershkrim: CellValue::text("x".repeat(80)),
            ..ImportRecord::default()
        })];
        let sheet = ReportSheet::build(Code::Im, &rows);
        let constraints = width_constraints(&sheet.widths);

        assert_eq!(constraints.len(), 12);
        assert!(matches!(
            constraints[0],
            ColumnConstraint::UpperBoundary(Width::Fixed(14))
        ));
        assert!(matches!(
            constraints[4],
            ColumnConstraint::UpperBoundary(Width::Fixed(width)) if usize::from(width) == WIDTH_MAX
        ));

        let mut table = preview_table(Code::Im, &sheet);
        assert_eq!(table.column_count(), 12);
    }
}

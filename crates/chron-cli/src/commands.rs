use std::path::PathBuf;

use anyhow::Result;
use chron_ingest::IngestOptions;
use chron_map::{ColumnMapping, ColumnResolver};
use chron_model::CanonicalField;
use chron_transform::{ReportSheet, preview, report_file_name};
use tracing::info;

use crate::cli::{OutputFormatArg, PreviewArgs, SourceArgs, TransformArgs};
use crate::summary::{print_columns, print_preview};
use crate::types::TransformResult;
use chron_cli::output::{create_output, write_report_csv, write_rows_json};
use chron_cli::pipeline::{load_sheet, run_transform};

fn ingest_options(source: &SourceArgs) -> IngestOptions {
    IngestOptions::new().with_header_scan_limit(source.header_scan_limit)
}

pub fn run_transform_command(args: &TransformArgs) -> Result<TransformResult> {
    let sheet = load_sheet(
        &args.source.input,
        args.source.delimiter,
        &ingest_options(&args.source),
    )?;
    let mode = args.mode.mode;
    let output = run_transform(&sheet, mode, args.mode.vlere_poliuretan.as_deref());

    let output_path = args.output.clone().unwrap_or_else(|| {
        let today = chrono::Utc::now().date_naive();
        PathBuf::from(report_file_name(mode, today, args.format.extension()))
    });
    let writer = create_output(&output_path)?;
    match args.format {
        OutputFormatArg::Csv => {
            let sheet = ReportSheet::build(mode, &output.rows);
            write_report_csv(writer, &sheet)?;
        }
        OutputFormatArg::Json => write_rows_json(writer, &output.rows)?,
    }
    info!(path = %output_path.display(), rows = output.rows.len(), "report written");

    Ok(TransformResult {
        input: args.source.input.clone(),
        output: output_path,
        mode,
        header_index: sheet.header_index,
        anchored: sheet.anchored,
        report: output.report,
    })
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let sheet = load_sheet(
        &args.source.input,
        args.source.delimiter,
        &ingest_options(&args.source),
    )?;
    let mode = args.mode.mode;
    let output = run_transform(&sheet, mode, args.mode.vlere_poliuretan.as_deref());
    let shown = preview(&output.rows, args.limit);
    print_preview(mode, shown, output.rows.len());
    Ok(())
}

pub fn run_columns(args: &SourceArgs) -> Result<()> {
    let sheet = load_sheet(&args.input, args.delimiter, &ingest_options(args))?;
    let resolver = ColumnResolver::build(&sheet.rows);
    let mapping = ColumnMapping::build(&resolver, &CanonicalField::ALL);
    print_columns(&sheet, &mapping);
    Ok(())
}

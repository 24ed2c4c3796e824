//! CLI argument definitions for the chronologies tool.

use std::convert::Infallible;
use std::path::PathBuf;

use chron_ingest::HEADER_SCAN_LIMIT;
use chron_model::Code;
use chron_transform::parse_requested_mode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chronologies",
    version,
    about = "Chronologies - turn customs export sheets into import/export reports",
    long_about = "Read a customs/logistics export sheet, locate its header row, resolve the\n\
                  canonical columns whatever their spelling, and write the import or export\n\
                  report in its fixed column order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a sheet and write the report.
    Transform(TransformArgs),

    /// Show the first transformed rows without writing anything.
    Preview(PreviewArgs),

    /// Show which column each canonical field resolved to.
    Columns(SourceArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Delimited text export of the source sheet.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field delimiter of the input file.
    #[arg(long = "delimiter", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Rows inspected when looking for the header row.
    #[arg(long = "header-scan-limit", default_value_t = HEADER_SCAN_LIMIT)]
    pub header_scan_limit: usize,
}

#[derive(Args)]
pub struct ModeArgs {
    /// Report variant: export/eksport/ex or import/importi/im (unrecognized means export).
    #[arg(long = "mode", default_value = "export", value_parser = parse_mode)]
    pub mode: Code,

    /// Value for the "Vlere poliuretan" column of export reports.
    #[arg(long = "vlere-poliuretan", value_name = "VALUE")]
    pub vlere_poliuretan: Option<String>,
}

#[derive(Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Output path (default: chronologies_<MODE>_<DATE>.<ext> in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Number of rows to show (1-100, default 20).
    #[arg(long = "limit")]
    pub limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

impl OutputFormatArg {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_mode(raw: &str) -> Result<Code, Infallible> {
    Ok(parse_requested_mode(raw))
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    let value = match raw {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got '{raw}'")),
    }
}

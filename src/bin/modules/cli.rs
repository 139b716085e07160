use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for querying element display properties by atomic number or symbol.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(
    version,
    about = ABOUT,
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Elements to look up, each an atomic-number index (0-103) or a symbol.
    ///
    /// Symbols match the table's two-character lowercase form with or without the padding
    /// space, so 'c' and 'c ' both select carbon. With no query the whole table is printed.
    #[arg(value_name = "ELEMENT")]
    pub queries: Vec<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for floating-point values.
    #[arg(short, long, default_value_t = 2)]
    pub precision: usize,
}

/// Options for selecting the table to query.
#[derive(Args)]
#[command(next_help_heading = "Table Options")]
pub struct TableOptions {
    /// Custom element table in TOML format.
    ///
    /// If not specified, the built-in table is used. A custom table must satisfy the same
    /// contract as the built-in one: 104 records in index order with valid symbols, colors,
    /// and coefficients.
    #[arg(short = 'T', long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

/// Output format for the query results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table with index, symbol, radius, color, and coefficients.
    Pretty,
    /// Comma-separated values with columns: index, symbol, radius, r, g, b, e1, e2, e3.
    Csv,
    /// JSON object containing an elements array.
    Json,
}

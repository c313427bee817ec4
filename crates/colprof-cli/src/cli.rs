//! CLI argument definitions for the column profiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colprof",
    version,
    about = "Column profiler - infer column types and statistics from CSV files",
    long_about = "Profile the columns of a delimited text file.\n\n\
                  Rows with the wrong field count are set aside, placeholder values are\n\
                  treated as missing, and every column gets a type (Float, Integer, Bool,\n\
                  Enum or String), its most common values, outliers and statistics."
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

    /// Include cell values in debug and trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile every column of a delimited file.
    Profile(ProfileArgs),

    /// Print the default profile configuration as JSON.
    Defaults,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Delimited file to profile (`-` reads standard input).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", short = 'd', default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Trim whitespace around every field.
    #[arg(long = "trim")]
    pub trim: bool,

    /// JSON profile configuration; flags below override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum share of values matching a numeric pattern (0, 1].
    #[arg(long = "threshold", value_name = "RATIO")]
    pub threshold: Option<f64>,

    /// Minimum share of missing values for a column to be empty (0, 1].
    #[arg(long = "empty-threshold", value_name = "RATIO")]
    pub empty_threshold: Option<f64>,

    /// Placeholder treated as missing; repeat to set several (replaces the defaults).
    #[arg(long = "sentinel", value_name = "VALUE")]
    pub sentinels: Vec<String>,

    /// Strip a leading `<` or `>` from numeric values before inference.
    #[arg(long = "strip-comparison-operators")]
    pub strip_comparison_operators: bool,

    /// Which values count towards the numeric match ratios.
    #[arg(long = "ratio-denominator", value_enum)]
    pub ratio_denominator: Option<RatioDenominatorArg>,

    /// Type for columns with at most two distinct non-boolean values.
    #[arg(long = "narrow-columns", value_enum)]
    pub narrow_columns: Option<NarrowColumnsArg>,

    /// Analyze columns in parallel.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write the JSON report to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show the N most common values of each column.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Exit with status 2 when any column failed to analyze.
    #[arg(long = "strict")]
    pub strict: bool,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let value = if value == "\\t" { "\t" } else { value };
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be one ASCII character, got {value:?}")),
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RatioDenominatorArg {
    /// Every value, missing ones included.
    All,
    /// Only non-missing values.
    NonMissing,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NarrowColumnsArg {
    Enum,
    String,
    Unclassified,
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

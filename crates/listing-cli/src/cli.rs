//! CLI argument definitions for the listing converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

/// Source file read when no input path is given.
pub const DEFAULT_INPUT: &str = "test-files/products.csv";

/// Target file written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "test-files/result.csv";

#[derive(Parser)]
#[command(
    name = "listing",
    version,
    about = "Product listing converter - normalize prices and dates into an offer file",
    long_about = "Convert a product export into an offer file.\n\n\
                  Reads a semicolon-separated UTF-8 file, normalizes selling prices\n\
                  and publication dates, and writes a pipe-separated ISO-8859-1 file."
)]
pub struct Cli {
    /// Subcommand to run (defaults to `convert` with the default paths).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a product file into an offer file.
    Convert(ConvertArgs),

    /// Show the delimiter, quote, escape and encoding settings of both files.
    Dialects,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Product file to read (`;`-separated, UTF-8).
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Offer file to write (`|`-separated, ISO-8859-1).
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Transform and report without writing the offer file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
            report: None,
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

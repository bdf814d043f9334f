//! CLI argument definitions for the ethnicity classification tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eff",
    version,
    about = "Classify ethnicity data and reshape chart and table descriptions",
    long_about = "Standardise raw ethnicity labels, find the classifications that fit them,\n\
                  harmonise pasted data against a lookup, and build flat chart and table\n\
                  data from saved builder descriptions."
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

    /// Allow raw data values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Engine configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding standardiser.csv, classifications.csv and harmoniser.csv.
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the standard form of raw ethnicity labels.
    Standardise(StandardiseArgs),

    /// Find the classifications that fit a CSV file's ethnicity column.
    Classify(ClassifyArgs),

    /// Append harmonised lookup columns to a CSV file.
    Harmonise(HarmoniseArgs),

    /// Link a builder classification id and values to a classification.
    Match(MatchArgs),

    /// Build flat data from a chart description.
    Chart(ChartArgs),

    /// Build flat or cross-tab data from a table description.
    Table(TableArgs),
}

#[derive(Args)]
pub struct StandardiseArgs {
    /// Raw ethnicity labels.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// CSV file with a header row and an ethnicity column.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Print every classification output as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct HarmoniseArgs {
    /// CSV file with a header row and an ethnicity column.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write the harmonised CSV here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Classification id chosen in the builder, e.g. "5A+".
    #[arg(long = "id", value_name = "ID")]
    pub id: String,

    /// Raw ethnicity values entered in the builder.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Report the link in the builder's has_* vocabulary.
    #[arg(long = "builder")]
    pub builder: bool,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Chart description JSON file.
    #[arg(value_name = "JSON")]
    pub description: PathBuf,

    /// Upgrade with these version 1 chart settings instead of building flat data.
    #[arg(long = "upgrade", value_name = "SETTINGS")]
    pub upgrade: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct TableArgs {
    /// Table description JSON file.
    #[arg(value_name = "JSON")]
    pub description: PathBuf,

    /// Lay grouped tables out as a cross-tab.
    #[arg(long = "crosstab", conflicts_with = "upgrade")]
    pub crosstab: bool,

    /// Upgrade with these version 1 table settings instead of building flat data.
    #[arg(long = "upgrade", value_name = "SETTINGS")]
    pub upgrade: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

/// Output format for builder commands.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// The full output object as JSON.
    Json,
    /// Only the data rows, as CSV.
    Csv,
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

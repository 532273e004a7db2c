//! CLI argument definitions for RMS Offline Analytics.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rms-offline",
    version,
    about = "RMS Offline Analytics - aggregate device-offline exports",
    long_about = "Aggregate Remote Monitoring System device-offline CSV exports.\n\n\
                  Loads an export with encoding fallback, normalizes it, and\n\
                  computes the KPIs and frequency tables the dashboards display."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the dashboard KPIs and tallies for an export.
    Summary(SummaryArgs),

    /// Cross-tabulate an export by domain: stat cards, region x domain,
    /// per-domain aging, top reasons.
    Breakdown(BreakdownArgs),

    /// List the distinct values of every filterable dimension.
    Dimensions(DimensionsArgs),
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to the device-offline CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Keep only these sub regions (repeatable).
    #[arg(long = "region", value_name = "NAME")]
    pub regions: Vec<String>,

    /// Keep only these device brands (repeatable).
    #[arg(long = "brand", value_name = "NAME")]
    pub brands: Vec<String>,

    /// Keep only these aging buckets (repeatable).
    #[arg(long = "aging", value_name = "BUCKET")]
    pub aging: Vec<String>,

    /// Number of reasons to include in the reason table.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct BreakdownArgs {
    /// Path to the device-offline CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DimensionsArgs {
    /// Path to the device-offline CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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

//! RMS Offline Analytics CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use rms_cli::logging::{LogConfig, LogFormat, init_logging};
use rms_cli::pipeline::{SummaryRequest, run_breakdown, run_dimensions, run_summary};

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_breakdown, print_dimensions, print_json, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Summary(args) => {
            let request = SummaryRequest {
                regions: args.regions.clone(),
                brands: args.brands.clone(),
                aging: args.aging.clone(),
                reason_limit: args.top,
            };
            match run_summary(&args.csv, &request) {
                Ok(result) => {
                    if args.json {
                        emit_json(&result)
                    } else {
                        print_summary(&result);
                        0
                    }
                }
                Err(error) => report_error(&error),
            }
        }
        Command::Breakdown(args) => match run_breakdown(&args.csv) {
            Ok(result) => {
                if args.json {
                    emit_json(&result)
                } else {
                    print_breakdown(&result);
                    0
                }
            }
            Err(error) => report_error(&error),
        },
        Command::Dimensions(args) => match run_dimensions(&args.csv) {
            Ok(result) => {
                if args.json {
                    emit_json(&result)
                } else {
                    print_dimensions(&result);
                    0
                }
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn emit_json<T: serde::Serialize>(value: &T) -> i32 {
    match print_json(value) {
        Ok(()) => 0,
        Err(error) => report_error(&error),
    }
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

//! `regform` command-line entry point.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use regform_cli::commands::{run_check, run_fill, run_locations};
use regform_cli::logging::{LogConfig, LogFormat, init_logging};
use regform_cli::settings::Settings;
use regform_core::ValidationMode;

mod cli;

use crate::cli::{CheckArgs, Cli, Command, FillArgs, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let mut stdout = io::stdout().lock();
    match &cli.command {
        Command::Fill(args) => {
            let settings = load_settings(cli, args)?;
            let summary = run_fill(io::stdin().lock(), &mut stdout, &settings)?;
            Ok(summary.exit_code())
        }
        Command::Check(CheckArgs {
            fields,
            show_location,
            json,
        }) => {
            let valid = run_check(fields, *show_location, *json, &mut stdout)?;
            Ok(if valid { 0 } else { 1 })
        }
        Command::Locations => {
            run_locations(&mut stdout)?;
            Ok(0)
        }
    }
}

/// Settings file values, with command-line flags taking precedence.
fn load_settings(cli: &Cli, args: &FillArgs) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("load settings")?;
    if args.show_location {
        settings.form.show_location_section = true;
    }
    if args.validate_on_change {
        settings.form.validation_mode = ValidationMode::OnChange;
    }
    Ok(settings)
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
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}

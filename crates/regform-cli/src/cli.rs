//! CLI argument definitions for `regform`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use regform_cli::script::parse_assignment;
use regform_model::Field;

#[derive(Parser)]
#[command(
    name = "regform",
    version,
    about = "Registration form with validation and a cascading location selector",
    long_about = "Fill in a registration form from line-oriented input, or validate\n\
                  field values in one shot.\n\n\
                  Optional location details (country, state, city, postal code) are\n\
                  only validated while the location section is shown."
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include typed field values in logs.
    ///
    /// Off by default so passwords and personal details never reach log
    /// output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: settings.toml in the platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fill in the form from input events read on stdin.
    Fill(FillArgs),

    /// Validate field values and print the issues.
    Check(CheckArgs),

    /// List the countries, states and cities available for selection.
    Locations,
}

#[derive(Parser)]
pub struct FillArgs {
    /// Start with the location section shown.
    #[arg(long = "show-location")]
    pub show_location: bool,

    /// Validate each field as soon as it is edited.
    #[arg(long = "validate-on-change")]
    pub validate_on_change: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Field value as <field>=<value>; repeat for each field.
    #[arg(long = "field", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub fields: Vec<(Field, String)>,

    /// Validate the location fields as well.
    #[arg(long = "show-location")]
    pub show_location: bool,

    /// Print the report as JSON.
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

//! CLI argument definitions for the stop reconciliation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stopsync",
    version,
    about = "Reconcile bus stop registries against rapid and rail authority registries",
    long_about = "Reconcile a general bus stop registry with the rapid and rail authority\n\
                  registries.\n\n\
                  Assigns canonical stop ids, numbers route links per route and direction,\n\
                  and normalizes stop and street names."
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
    /// Reconcile the three registries and write the stops and route-link tables.
    Run(RunArgs),

    /// Print normalized names, one per line.
    Normalize(NormalizeArgs),

    /// Print the effective rule tables.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// General bus stop registry (CSV).
    #[arg(value_name = "GENERAL")]
    pub general: PathBuf,

    /// Rapid transit authority registry (CSV).
    #[arg(value_name = "RAPID")]
    pub rapid: PathBuf,

    /// Rail authority registry (CSV).
    #[arg(value_name = "RAIL")]
    pub rail: PathBuf,

    /// Rules file (TOML) overriding the built-in rule tables.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Output directory for generated files (default: directory of GENERAL).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also export the stops table as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Reconcile and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Keep off-service routes in the route-link table.
    #[arg(long = "keep-all-routes")]
    pub keep_all_routes: bool,

    /// Leave stop and street names as extracted.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Apply the street-name rule instead of the stop-name rule.
    #[arg(long = "street")]
    pub street: bool,

    /// Rules file (TOML) overriding the built-in rule tables.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Names to normalize.
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Rules file (TOML) overriding the built-in rule tables.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,
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

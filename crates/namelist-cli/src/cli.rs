//! CLI argument definitions for the name-list tool.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "namelist",
    version,
    about = "Deduplicate and merge name lists",
    long_about = "Deduplicate a new-name list against a default-name list.\n\n\
                  New names may be supplied as JSON or CSV; CSV input is\n\
                  converted and persisted as a sibling JSON file first.\n\
                  The reduced list is written to <new>_R.json and the\n\
                  merged list to <new>_M.json."
)]
pub struct Cli {
    #[command(flatten)]
    pub merge: MergeArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Path to the new-name file (.json, or .csv to convert first).
    #[arg(value_name = "NEW_NAME_FILE")]
    pub new_name_file: PathBuf,

    /// Path to the default-name file (.json).
    #[arg(value_name = "DEFAULT_NAME_FILE")]
    pub default_name_file: PathBuf,

    /// Resolve, load, and dedupe without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Overwrite existing conversion and output targets.
    ///
    /// By default an existing target file is left untouched and the
    /// write is skipped with a warning. The self-overwrite guard on the
    /// resolved new-name file always applies.
    #[arg(long = "force")]
    pub force: bool,
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

//! CLI argument definitions for the building catalog importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bldg",
    version,
    about = "Building catalog importer - reconcile CSV feeds into the catalog",
    long_about = "Reconcile externally produced building CSV feeds into the catalog.\n\n\
                  Rows are validated structurally and merged by unique id.\n\
                  Invalid rows are skipped and reported; they never abort the batch."
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
    /// Import a CSV feed into the catalog.
    Import(ImportArgs),

    /// Show the active column map (canonical field to header text).
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV feed.
    #[arg(value_name = "CSV_FILE")]
    pub file: PathBuf,

    /// Catalog file to reconcile into (created when absent).
    #[arg(long = "catalog", value_name = "PATH", default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Built-in header vocabulary to expect.
    #[arg(
        long = "vocab",
        value_enum,
        default_value = "japanese",
        conflicts_with = "columns"
    )]
    pub vocab: VocabArg,

    /// JSON file with a custom column map (replaces --vocab).
    #[arg(long = "columns", value_name = "PATH")]
    pub columns: Option<PathBuf>,

    /// Run the batch and report, without writing the catalog back.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the filename/media-type gate applied to uploads.
    #[arg(long = "no-upload-gate")]
    pub no_upload_gate: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Built-in header vocabulary to show.
    #[arg(
        long = "vocab",
        value_enum,
        default_value = "japanese",
        conflicts_with = "columns"
    )]
    pub vocab: VocabArg,

    /// JSON file with a custom column map (replaces --vocab).
    #[arg(long = "columns", value_name = "PATH")]
    pub columns: Option<PathBuf>,
}

/// Built-in header vocabularies.
#[derive(Clone, Copy, ValueEnum)]
pub enum VocabArg {
    Japanese,
    English,
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

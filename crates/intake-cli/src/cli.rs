//! CLI argument definitions for the intake form checker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Patient intake form checker - validate and review registration forms",
    long_about = "Validate patient registration form documents and render the review panel.\n\n\
                  Form documents are JSON objects with \"text\", \"choice\", \"checked\" \
                  and \"numbers\" maps keyed by control name."
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

    /// Allow entered form values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a form and print the review panel.
    Review(FormArgs),

    /// Validate a form and decide whether it may be submitted.
    Submit(SubmitArgs),

    /// List the validation rules in evaluation order.
    Rules,
}

#[derive(Parser)]
pub struct FormArgs {
    /// Path to the JSON form document.
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// Reference date for date-of-birth bounds (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Symptom notes longer than this are truncated in the review.
    #[arg(long = "symptom-width", value_name = "CHARS", default_value_t = 200)]
    pub symptom_width: usize,

    /// Output format for the review.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Save the document with the normalized ZIP code back to FORM.
    #[arg(long = "write-back")]
    pub write_back: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

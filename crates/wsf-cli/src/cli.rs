//! CLI argument definitions for the worksheet flattener.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wsf_model::{DEFAULT_MAX_DOMAIN_COUNT, DEFAULT_MAX_QUESTION_COUNT, FlattenOptions};

#[derive(Parser)]
#[command(
    name = "worksheet-flattener",
    version,
    about = "Flatten a student worksheet into one row per assessment attempt",
    long_about = "Flatten a long-format student worksheet export (one row per response)\n\
                  into a wide CSV with one row per session, student and assessment.\n\n\
                  Domain and question values are spread over a fixed number of numbered\n\
                  columns; see --max-domains and --max-questions."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Flatten a worksheet CSV into a wide CSV.
    Flatten(FlattenArgs),

    /// Print the output header for the given maxima.
    Columns(SizeArgs),
}

#[derive(Args, Clone, Copy)]
pub struct SizeArgs {
    /// Maximum number of domains for any session.
    ///
    /// Sessions with fewer domains get empty cells; extra domains (last by
    /// name) are dropped.
    #[arg(
        long = "max-domains",
        env = "WSF_MAX_DOMAINS",
        value_name = "N",
        default_value_t = DEFAULT_MAX_DOMAIN_COUNT
    )]
    pub max_domains: usize,

    /// Maximum number of questions for any assessment.
    ///
    /// Assessments with fewer questions get empty cells; extra questions
    /// (last in input order) are dropped.
    #[arg(
        long = "max-questions",
        env = "WSF_MAX_QUESTIONS",
        value_name = "N",
        default_value_t = DEFAULT_MAX_QUESTION_COUNT
    )]
    pub max_questions: usize,
}

#[derive(Args)]
pub struct FlattenArgs {
    /// Worksheet CSV exported one row per response.
    #[arg(value_name = "WORKSHEET")]
    pub input: PathBuf,

    /// Output path (default: flattened-<WORKSHEET> next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub sizes: SizeArgs,

    /// Fail when repeated assessment or domain values disagree across rows.
    ///
    /// Without this flag the first row wins and a warning is logged.
    #[arg(long = "strict")]
    pub strict: bool,

    /// How to print the run summary.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,
}

impl FlattenArgs {
    pub fn options(&self) -> FlattenOptions {
        self.sizes.options().with_strict(self.strict)
    }
}

impl SizeArgs {
    pub fn options(&self) -> FlattenOptions {
        FlattenOptions::new(self.max_domains, self.max_questions)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
    None,
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

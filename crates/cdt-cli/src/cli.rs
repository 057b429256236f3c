//! CLI argument definitions for the CDT coder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cdt-coder",
    version,
    about = "CDT Coder - Suggest dental procedure codes from clinical text",
    long_about = "Suggest CDT procedure codes from clinical text.\n\n\
                  Ranks a reference table of CDT codes against free text or a\n\
                  SOAP-structured visit note and prints the best matches as\n\
                  billing-code suggestions."
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

    /// Allow clinical note text (PHI) to appear in logs.
    #[arg(long = "log-phi", global = true)]
    pub log_phi: bool,

    /// Load the code catalog from a manifest directory instead of the
    /// embedded table (also honors CDT_STANDARDS_DIR).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest procedure codes for free clinical text.
    Suggest(SuggestArgs),

    /// Parse a SOAP note and suggest procedure codes for it.
    Note(NoteArgs),

    /// List the code catalog.
    Codes(CodesArgs),

    /// Show a single code, with did-you-mean help for unknown codes.
    Show(ShowArgs),

    /// Print a catalog integrity report.
    Doctor(DoctorArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Clinical description to match (multiple words are joined).
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Maximum number of suggestions to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Only suggest codes from one service category (e.g. endodontics).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Print suggestions as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct NoteArgs {
    /// Path to the note text file, or '-' to read stdin.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Maximum number of suggestions to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Print the parsed note and suggestions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CodesArgs {
    /// Only list codes from one service category (e.g. restorative).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Print the catalog as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// CDT code to look up (e.g. D2391).
    #[arg(value_name = "CODE")]
    pub code: String,
}

#[derive(Parser)]
pub struct DoctorArgs {
    /// Print the report as JSON instead of a table.
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

//! The `lexis` command line and MCP server.
//!
//! [`Cli`] and [`Commands`] define the argument surface, [`commands`] holds
//! one module per subcommand, and `server` (feature `mcp`) exposes the same
//! engine as MCP tools. [`command()`] feeds man page and completion
//! generation in `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// When to color terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout looks like a terminal.
    #[default]
    Auto,
    /// Force color on.
    Always,
    /// Plain output.
    Never,
}

impl ColorChoice {
    /// Set the process-wide owo-colors override. `Auto` leaves detection on.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, lexis=trace)
    LEXIS_LOG_PATH         Explicit log file path
    LEXIS_LOG_DIR          Log directory
    LEXIS_KEYWORD_LIMIT    Default maximum number of keywords
";

/// Top-level `lexis` arguments.
#[derive(Parser)]
#[command(name = "lexis")]
#[command(about = "Deterministic rule-based text analytics", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version and exit
    #[arg(long)]
    pub version_only: bool,

    /// Load this config file on top of discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before loading config or reading inputs
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to use color
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// lexis subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze sentiment, keywords, entities, and structure of a text
    Analyze(commands::analyze::AnalyzeArgs),

    /// Analyze many texts from one file (fails on the first blank item)
    Batch(commands::batch::BatchArgs),

    /// Compare two texts for similarity
    Compare(commands::compare::CompareArgs),

    /// Analyze a record exported from a record store, or print one field
    Record(commands::record::RecordArgs),

    /// List supported analysis features
    Features(commands::features::FeaturesArgs),

    /// Report engine readiness
    Status(commands::status::StatusArgs),

    /// Show version, effective configuration and lexicon sizes
    Info(commands::info::InfoArgs),

    /// Serve the analysis tools over MCP on stdin/stdout
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// The clap command tree, for man pages and completions.
pub fn command() -> clap::Command {
    Cli::command()
}

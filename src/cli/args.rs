//! CLI argument definitions.

use crate::cli::validators::parse_timeout;
use crate::timeline::{ComplementMode, TimeRange};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Remove time ranges from an audio file, losslessly stitching the rest.
#[derive(Debug, Parser)]
#[command(name = "audiocut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source audio file to cut.
    pub input: Option<PathBuf>,

    /// Common options for cutting.
    #[command(flatten)]
    pub cut: CutArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the cut operation.
#[derive(Debug, Args)]
pub struct CutArgs {
    /// Time range to remove as START-END seconds (e.g. `3-5` or
    /// `2.5-10.25`). Repeatable; applied after any --ranges-json ranges.
    #[arg(short = 'r', long = "remove", value_name = "START-END")]
    pub remove: Vec<TimeRange>,

    /// JSON file with ranges to remove: `[{"start": 3, "end": 5}, ...]`.
    #[arg(long, value_name = "FILE", env = "AUDIOCUT_RANGES_JSON")]
    pub ranges_json: Option<PathBuf>,

    /// Output file (default: input name with a `_cut` suffix).
    #[arg(short, long, env = "AUDIOCUT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// How ranges are interpreted: `normalized` sorts and merges them,
    /// `sequential` walks them in the order given.
    #[arg(long, env = "AUDIOCUT_COMPLEMENT_MODE")]
    pub complement_mode: Option<ComplementMode>,

    /// Shorthand for `--complement-mode sequential`.
    #[arg(long, conflicts_with = "complement_mode")]
    pub sequential_ranges: bool,

    /// Timeout per external tool call in seconds.
    #[arg(long, value_parser = parse_timeout, env = "AUDIOCUT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar without reducing log output.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! Audiocut - remove time ranges from audio files.
//!
//! This crate computes the retained complement of caller-supplied deletion
//! ranges and stitches the kept audio back together with ffmpeg.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod ffmpeg;
pub mod pipeline;
pub mod timeline;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, CutArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use constants::OUTPUT_SUFFIX;
use ffmpeg::FfmpegToolkit;
use pipeline::{CutRequest, run_cut};
use timeline::{ComplementMode, TimeRange};
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the audiocut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.cut.verbose, cli.cut.quiet);

    // Install Ctrl+C handler to sweep live workspaces on interrupt
    if let Err(e) = ctrlc::set_handler(|| {
        pipeline::cleanup_all_workspaces();
        std::process::exit(130); // 128 + SIGINT(2)
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Default: cut the input file
    let Some(input) = cli.input else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        std::process::exit(0);
    };

    cut_file(&input, &cli.cut, &config)
}

/// Cut the given input file with the resolved options.
fn cut_file(input: &Path, args: &CutArgs, config: &Config) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    let deletions = collect_deletions(args)?;
    if deletions.is_empty() {
        return Err(Error::NoRangesSupplied);
    }

    let mode = if args.sequential_ranges {
        ComplementMode::Sequential
    } else {
        args.complement_mode
            .unwrap_or(config.defaults.complement_mode)
    };
    let timeout_secs = args.timeout.unwrap_or(config.defaults.timeout_secs);
    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));

    info!(
        "Removing {} range(s) from {} (mode: {mode}, timeout: {timeout_secs}s)",
        deletions.len(),
        input.display()
    );

    let toolkit = FfmpegToolkit::new(&config.tools, Duration::from_secs(timeout_secs));
    toolkit.check_available()?;

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let request = CutRequest {
        source: input,
        deletions: &deletions,
        mode,
        destination: &destination,
        show_progress: !args.quiet && !args.no_progress,
    };
    let summary = runtime.block_on(run_cut(&toolkit, request))?;

    let elapsed = start_time.elapsed().as_secs_f64();
    info!(
        "Kept {:.3}s of {:.3}s across {} clip(s) in {elapsed:.2}s",
        summary.retained_duration, summary.source_duration, summary.clip_count
    );

    Ok(())
}

/// Gather deletion ranges from the JSON file (first) and the repeated
/// `--remove` arguments (after), preserving that order for sequential mode.
fn collect_deletions(args: &CutArgs) -> Result<Vec<TimeRange>> {
    let mut deletions: Vec<TimeRange> = Vec::new();

    if let Some(path) = &args.ranges_json {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::RangesRead {
            path: path.clone(),
            source: e,
        })?;
        let parsed: Vec<TimeRange> =
            serde_json::from_str(&contents).map_err(|e| Error::RangesParse {
                path: path.clone(),
                source: e,
            })?;

        // Zero-width ranges are tolerated here: legacy callers send them
        // and they only move the resolver cursor.
        for range in &parsed {
            if range.start < 0.0 || range.end < range.start {
                return Err(Error::InvalidTimeRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
        deletions.extend(parsed);
    }

    deletions.extend_from_slice(&args.remove);
    Ok(deletions)
}

/// Default output path: input name with a suffix before the extension.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = input.extension().and_then(|e| e.to_str()).map_or_else(
        || format!("{stem}{OUTPUT_SUFFIX}"),
        |ext| format!("{stem}{OUTPUT_SUFFIX}.{ext}"),
    );
    input.with_file_name(name)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_keeps_extension() {
        let path = default_output_path(Path::new("/music/take.mp3"));
        assert_eq!(path, PathBuf::from("/music/take_cut.mp3"));
    }

    #[test]
    fn test_default_output_path_without_extension() {
        let path = default_output_path(Path::new("/music/take"));
        assert_eq!(path, PathBuf::from("/music/take_cut"));
    }

    #[test]
    fn test_collect_deletions_orders_json_before_cli() {
        let dir = tempfile::TempDir::new().unwrap();
        let json_path = dir.path().join("ranges.json");
        std::fs::write(&json_path, r#"[{"start": 1.0, "end": 2.0}]"#).unwrap();

        let args = CutArgs {
            remove: vec![TimeRange::new(5.0, 6.0)],
            ranges_json: Some(json_path),
            output: None,
            complement_mode: None,
            sequential_ranges: false,
            timeout: None,
            quiet: false,
            no_progress: false,
            verbose: 0,
        };

        let deletions = collect_deletions(&args).unwrap();
        assert_eq!(deletions, vec![TimeRange::new(1.0, 2.0), TimeRange::new(5.0, 6.0)]);
    }

    #[test]
    fn test_collect_deletions_allows_zero_width_json_ranges() {
        let dir = tempfile::TempDir::new().unwrap();
        let json_path = dir.path().join("ranges.json");
        std::fs::write(&json_path, r#"[{"start": 4.0, "end": 4.0}]"#).unwrap();

        let args = CutArgs {
            remove: Vec::new(),
            ranges_json: Some(json_path),
            output: None,
            complement_mode: None,
            sequential_ranges: false,
            timeout: None,
            quiet: false,
            no_progress: false,
            verbose: 0,
        };

        let deletions = collect_deletions(&args).unwrap();
        assert_eq!(deletions, vec![TimeRange::new(4.0, 4.0)]);
    }

    #[test]
    fn test_collect_deletions_unreadable_json_carries_path() {
        let missing = PathBuf::from("/nonexistent/ranges.json");
        let args = CutArgs {
            remove: Vec::new(),
            ranges_json: Some(missing.clone()),
            output: None,
            complement_mode: None,
            sequential_ranges: false,
            timeout: None,
            quiet: false,
            no_progress: false,
            verbose: 0,
        };

        assert!(matches!(
            collect_deletions(&args),
            Err(Error::RangesRead { path, .. }) if path == missing
        ));
    }

    #[test]
    fn test_collect_deletions_rejects_invalid_json_ranges() {
        let dir = tempfile::TempDir::new().unwrap();
        let json_path = dir.path().join("ranges.json");
        std::fs::write(&json_path, r#"[{"start": 5.0, "end": 3.0}]"#).unwrap();

        let args = CutArgs {
            remove: Vec::new(),
            ranges_json: Some(json_path),
            output: None,
            complement_mode: None,
            sequential_ranges: false,
            timeout: None,
            quiet: false,
            no_progress: false,
            verbose: 0,
        };

        assert!(matches!(
            collect_deletions(&args),
            Err(Error::InvalidTimeRange { .. })
        ));
    }
}

//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "audiocut";

/// Default per-invocation timeout for external tool calls, in seconds.
///
/// The reference behavior placed no bound on ffmpeg/ffprobe runtime; a
/// corrupt or adversarial input could hold temp storage forever. Every
/// capability call is therefore bounded. Override with `--timeout` or
/// `defaults.timeout_secs` in the config file.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Maximum allowed timeout in seconds, to catch typo'd CLI values.
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// File name of the TOML configuration file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Separator between start and end in `--remove START-END` arguments.
pub const RANGE_SEPARATOR: char = '-';

/// Suffix appended to the input file stem for the default output path.
pub const OUTPUT_SUFFIX: &str = "_cut";

/// External tool binary names.
pub mod tools {
    /// Binary used for extraction and concatenation.
    pub const FFMPEG: &str = "ffmpeg";
    /// Binary used for metadata probing.
    pub const FFPROBE: &str = "ffprobe";
}

/// Per-invocation workspace naming.
pub mod workspace {
    /// Prefix for workspace temp directories.
    pub const DIR_PREFIX: &str = "audiocut-";
    /// Prefix for extracted clip files.
    pub const CLIP_PREFIX: &str = "clip-";
    /// File name of the concat demuxer manifest.
    pub const MANIFEST_FILENAME: &str = "concat-list.txt";
    /// File name stem of the merged artifact before delivery.
    pub const MERGED_STEM: &str = "merged";
    /// Timestamp format for scope identifiers.
    pub const SCOPE_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%3f";
}

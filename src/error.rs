//! Error types for audiocut.

/// Result type alias for audiocut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for audiocut.
///
/// Each processing stage surfaces a distinct variant so callers can tell
/// bad input apart from processing and delivery failures. Cleanup failures
/// are intentionally absent: they are logged and never reported as the
/// primary error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Source audio file does not exist.
    #[error("source audio file does not exist: {path}")]
    SourceMissing {
        /// Path to the missing source file.
        path: std::path::PathBuf,
    },

    /// No deletion ranges were supplied.
    #[error("no time ranges to remove were supplied (use --remove or --ranges-json)")]
    NoRangesSupplied,

    /// Failed to read a JSON range list file.
    #[error("failed to read range list '{path}'")]
    RangesRead {
        /// Path to the range list file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON range list.
    #[error("failed to parse range list '{path}'")]
    RangesParse {
        /// Path to the range list file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A time range has an invalid extent.
    #[error("invalid time range: start {start} must be less than end {end}")]
    InvalidTimeRange {
        /// Range start in seconds.
        start: f64,
        /// Range end in seconds.
        end: f64,
    },

    /// The deletion ranges cover the entire source audio.
    #[error("nothing left to keep: the ranges to remove cover the whole {duration:.3}s source")]
    EmptySelection {
        /// Total source duration in seconds.
        duration: f64,
    },

    /// External tool binary was not found on PATH.
    #[error("external tool '{tool}' was not found (is it installed and on PATH?)")]
    ToolNotFound {
        /// Name of the missing binary.
        tool: String,
    },

    /// External tool invocation exceeded the configured timeout.
    #[error("'{tool}' did not finish within {timeout_secs}s")]
    ToolTimeout {
        /// Name of the binary that timed out.
        tool: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },

    /// Failed to probe source audio metadata.
    #[error("failed to read audio metadata from '{path}': {reason}")]
    Probe {
        /// Path to the source file.
        path: std::path::PathBuf,
        /// Description of the probe failure.
        reason: String,
    },

    /// Failed to extract a clip for one retention range.
    #[error("failed to extract clip {start:.3}s+{duration:.3}s from '{path}': {reason}")]
    Extraction {
        /// Path to the source file.
        path: std::path::PathBuf,
        /// Clip start in seconds.
        start: f64,
        /// Clip duration in seconds.
        duration: f64,
        /// Description of the extraction failure.
        reason: String,
    },

    /// Failed to concatenate extracted clips.
    #[error("failed to concatenate {clip_count} clip(s): {reason}")]
    Concatenation {
        /// Number of clips in the concat manifest.
        clip_count: usize,
        /// Description of the concatenation failure.
        reason: String,
    },

    /// Failed to deliver the merged output to its destination.
    #[error("failed to write output file '{path}'")]
    Delivery {
        /// Destination path.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

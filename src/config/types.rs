//! Configuration type definitions.

use crate::constants::{DEFAULT_TIMEOUT_SECS, tools};
use crate::timeline::ComplementMode;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool settings.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// External tool binary locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// ffmpeg binary name or path.
    pub ffmpeg: String,

    /// ffprobe binary name or path.
    pub ffprobe: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: tools::FFMPEG.to_string(),
            ffprobe: tools::FFPROBE.to_string(),
        }
    }
}

/// Default cut settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Per-invocation timeout for external tool calls, in seconds.
    pub timeout_secs: u64,

    /// How deletion ranges are interpreted.
    pub complement_mode: ComplementMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            complement_mode: ComplementMode::Normalized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_config_default_values() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.timeout_secs, 300);
        assert_eq!(defaults.complement_mode, ComplementMode::Normalized);
    }

    #[test]
    fn test_tools_config_default_binaries() {
        let tools = ToolsConfig::default();
        assert_eq!(tools.ffmpeg, "ffmpeg");
        assert_eq!(tools.ffprobe, "ffprobe");
    }
}

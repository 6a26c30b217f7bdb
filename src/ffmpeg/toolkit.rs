//! System ffmpeg/ffprobe adapter.

use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use super::MediaToolkit;
use super::command::{run_tool, stderr_snippet};
use super::probe::parse_duration;
use crate::config::ToolsConfig;
use crate::error::{Error, Result};

/// [`MediaToolkit`] implementation backed by the system `ffmpeg` and
/// `ffprobe` binaries.
///
/// The system binaries are used rather than linked FFmpeg libraries to
/// avoid native dev header/lib requirements; binary paths can be
/// overridden in the config file.
#[derive(Debug, Clone)]
pub struct FfmpegToolkit {
    ffmpeg: String,
    ffprobe: String,
    timeout: Duration,
}

impl FfmpegToolkit {
    /// Create a toolkit using the configured binary paths and a
    /// per-invocation timeout.
    #[must_use]
    pub fn new(tools: &ToolsConfig, timeout: Duration) -> Self {
        Self {
            ffmpeg: tools.ffmpeg.clone(),
            ffprobe: tools.ffprobe.clone(),
            timeout,
        }
    }

    /// Check that both binaries can be spawned.
    pub fn check_available(&self) -> Result<()> {
        for tool in [&self.ffmpeg, &self.ffprobe] {
            let found = std::process::Command::new(tool)
                .arg("-version")
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false);
            if !found {
                return Err(Error::ToolNotFound { tool: tool.clone() });
            }
        }
        Ok(())
    }
}

impl MediaToolkit for FfmpegToolkit {
    async fn probe(&self, source: &Path) -> Result<f64> {
        let args: Vec<&OsStr> = vec![
            OsStr::new("-v"),
            OsStr::new("error"),
            OsStr::new("-print_format"),
            OsStr::new("json"),
            OsStr::new("-show_format"),
            source.as_os_str(),
        ];

        let output = run_tool(&self.ffprobe, args, self.timeout).await?;
        if !output.status.success() {
            return Err(Error::Probe {
                path: source.to_path_buf(),
                reason: stderr_snippet(&output),
            });
        }

        let json = String::from_utf8_lossy(&output.stdout);
        let duration = parse_duration(&json).ok_or_else(|| Error::Probe {
            path: source.to_path_buf(),
            reason: "no duration in probe output".to_string(),
        })?;

        debug!("Probed {}: {:.3}s", source.display(), duration);
        Ok(duration)
    }

    async fn extract(&self, source: &Path, start: f64, duration: f64, dest: &Path) -> Result<()> {
        let start_arg = format!("{start}");
        let duration_arg = format!("{duration}");
        let args: Vec<&OsStr> = vec![
            OsStr::new("-hide_banner"),
            OsStr::new("-loglevel"),
            OsStr::new("error"),
            OsStr::new("-y"),
            OsStr::new("-ss"),
            OsStr::new(&start_arg),
            OsStr::new("-i"),
            source.as_os_str(),
            OsStr::new("-t"),
            OsStr::new(&duration_arg),
            dest.as_os_str(),
        ];

        let output = run_tool(&self.ffmpeg, args, self.timeout).await?;
        if !output.status.success() {
            return Err(Error::Extraction {
                path: source.to_path_buf(),
                start,
                duration,
                reason: stderr_snippet(&output),
            });
        }

        debug!(
            "Extracted {:.3}s+{:.3}s -> {}",
            start,
            duration,
            dest.display()
        );
        Ok(())
    }

    async fn concat(&self, manifest: &Path, clip_count: usize, dest: &Path) -> Result<()> {
        // Stream copy: clips come from the same source with identical codec
        // parameters, so no re-encoding is needed.
        let args: Vec<&OsStr> = vec![
            OsStr::new("-hide_banner"),
            OsStr::new("-loglevel"),
            OsStr::new("error"),
            OsStr::new("-y"),
            OsStr::new("-f"),
            OsStr::new("concat"),
            OsStr::new("-safe"),
            OsStr::new("0"),
            OsStr::new("-i"),
            manifest.as_os_str(),
            OsStr::new("-c"),
            OsStr::new("copy"),
            dest.as_os_str(),
        ];

        let output = run_tool(&self.ffmpeg, args, self.timeout).await?;
        if !output.status.success() {
            return Err(Error::Concatenation {
                clip_count,
                reason: stderr_snippet(&output),
            });
        }

        debug!("Concatenated {clip_count} clip(s) -> {}", dest.display());
        Ok(())
    }
}

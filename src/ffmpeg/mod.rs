//! External media tool invocation.
//!
//! Decoding, trimming and concatenation are delegated to the system
//! `ffmpeg`/`ffprobe` binaries. The capability set is modeled as the
//! [`MediaToolkit`] trait so the pipeline never depends on a particular
//! tool and tests can substitute a recording mock.

mod command;
mod manifest;
mod probe;
mod toolkit;

pub use manifest::format_concat_manifest;
pub use toolkit::FfmpegToolkit;

use std::future::Future;
use std::path::Path;

use crate::error::Result;

/// External media capabilities required by the pipeline.
pub trait MediaToolkit {
    /// Probe the source and return its total duration in seconds.
    fn probe(&self, source: &Path) -> impl Future<Output = Result<f64>> + Send;

    /// Extract `duration` seconds of audio starting at `start` from
    /// `source` into `dest`.
    fn extract(
        &self,
        source: &Path,
        start: f64,
        duration: f64,
        dest: &Path,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Losslessly concatenate the clips listed in `manifest` into `dest`.
    fn concat(
        &self,
        manifest: &Path,
        clip_count: usize,
        dest: &Path,
    ) -> impl Future<Output = Result<()>> + Send;
}

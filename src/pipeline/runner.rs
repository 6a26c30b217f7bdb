//! Cut pipeline execution.

use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::Workspace;
use crate::error::{Error, Result};
use crate::ffmpeg::{MediaToolkit, format_concat_manifest};
use crate::timeline::{ComplementMode, TimeRange, resolve_retained};

/// One cut request: the source, the ranges to remove and where the merged
/// output goes.
#[derive(Debug)]
pub struct CutRequest<'a> {
    /// Source audio file.
    pub source: &'a Path,
    /// Time ranges to remove, in caller-supplied order.
    pub deletions: &'a [TimeRange],
    /// How the deletion list is interpreted.
    pub mode: ComplementMode,
    /// Destination path for the merged output.
    pub destination: &'a Path,
    /// Whether to render an extraction progress bar.
    pub show_progress: bool,
}

/// Outcome of a successful cut.
#[derive(Debug)]
pub struct CutSummary {
    /// Total duration of the source in seconds.
    pub source_duration: f64,
    /// Total duration retained in the output, in seconds.
    pub retained_duration: f64,
    /// Number of clips extracted and concatenated.
    pub clip_count: usize,
    /// Where the merged output was written.
    pub destination: PathBuf,
}

/// Run the full cut pipeline for one request.
///
/// Stages: probe, resolve, concurrent extraction with an all-or-nothing
/// join, manifest + lossless concat, delivery. The workspace holding the
/// clips, the manifest and the pre-delivery merged artifact is released on
/// every path; the first stage failure aborts all later stages and is what
/// the caller observes.
pub async fn run_cut<T: MediaToolkit>(toolkit: &T, request: CutRequest<'_>) -> Result<CutSummary> {
    if !request.source.exists() {
        return Err(Error::SourceMissing {
            path: request.source.to_path_buf(),
        });
    }
    if request.deletions.is_empty() {
        return Err(Error::NoRangesSupplied);
    }

    let workspace = Workspace::create()?;
    debug!(
        "Cutting {} [scope {}]",
        request.source.display(),
        workspace.scope_id()
    );

    let source_duration = toolkit.probe(request.source).await?;
    info!("Source duration: {source_duration:.3}s");

    let retained = resolve_retained(source_duration, request.deletions, request.mode);
    if retained.is_empty() {
        return Err(Error::EmptySelection {
            duration: source_duration,
        });
    }
    info!(
        "Keeping {} range(s), removing {} range(s)",
        retained.len(),
        request.deletions.len()
    );

    let extension = request
        .source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("mp3")
        .to_string();

    let clips = extract_clips(toolkit, &request, &workspace, &retained, &extension).await?;

    let manifest_path = workspace.manifest_path();
    tokio::fs::write(&manifest_path, format_concat_manifest(&clips)).await?;

    debug!("Concatenating {} clip(s)", clips.len());
    let merged_path = workspace.merged_path(&extension);
    toolkit
        .concat(&manifest_path, clips.len(), &merged_path)
        .await?;

    deliver(&merged_path, request.destination).await?;
    info!("Wrote {}", request.destination.display());

    let retained_duration: f64 = retained.iter().map(TimeRange::duration).sum();
    let summary = CutSummary {
        source_duration,
        retained_duration,
        clip_count: clips.len(),
        destination: request.destination.to_path_buf(),
    };

    workspace.close();
    Ok(summary)
}

/// Extract one clip per retention range, concurrently.
///
/// All extractions read the same immutable source and write to distinct
/// workspace paths, so they run without coordination; the join is
/// all-or-nothing. On the first failure the remaining extraction futures
/// are dropped (killing their children best-effort) and the error
/// propagates; the workspace sweeps any clips that were already written.
async fn extract_clips<T: MediaToolkit>(
    toolkit: &T,
    request: &CutRequest<'_>,
    workspace: &Workspace,
    retained: &[TimeRange],
    extension: &str,
) -> Result<Vec<PathBuf>> {
    #[allow(clippy::cast_possible_truncation)]
    let pb = if request.show_progress {
        let pb = ProgressBar::new(retained.len() as u64);
        // Template is hardcoded and known to be valid
        #[allow(clippy::expect_used)]
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} clips")
                .expect("valid progress template")
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let extractions = retained.iter().enumerate().map(|(index, range)| {
        let clip_path = workspace.clip_path(index, extension);
        let pb = &pb;
        async move {
            toolkit
                .extract(request.source, range.start, range.duration(), &clip_path)
                .await?;
            pb.inc(1);
            Ok::<PathBuf, Error>(clip_path)
        }
    });

    let clips = try_join_all(extractions).await;
    match &clips {
        Ok(_) => pb.finish_and_clear(),
        Err(_) => pb.abandon(),
    }
    clips
}

/// Hand the merged artifact to its destination.
///
/// Rename when possible, fall back to a copy when the destination lives on
/// another filesystem; the workspace copy is removed with the workspace.
async fn deliver(merged: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Delivery {
                path: destination.to_path_buf(),
                source: e,
            })?;
    }

    if tokio::fs::rename(merged, destination).await.is_ok() {
        return Ok(());
    }

    tokio::fs::copy(merged, destination)
        .await
        .map(|_| ())
        .map_err(|e| Error::Delivery {
            path: destination.to_path_buf(),
            source: e,
        })
}

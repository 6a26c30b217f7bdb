//! Per-invocation temporary workspace.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::TempDir;
use tracing::{debug, warn};

use crate::constants::workspace::{
    CLIP_PREFIX, DIR_PREFIX, MANIFEST_FILENAME, MERGED_STEM, SCOPE_TIMESTAMP_FORMAT,
};
use crate::error::Result;

/// Isolated temp directory for one pipeline invocation.
///
/// The directory name carries a generated scope id, so concurrent
/// invocations never share paths. Dropping the workspace removes the
/// directory and everything in it, which is what guarantees clip and
/// manifest cleanup on every failure path.
pub struct Workspace {
    scope_id: String,
    path: PathBuf,
    dir: Option<TempDir>,
}

impl Workspace {
    /// Create a fresh workspace under the system temp directory.
    pub fn create() -> Result<Self> {
        let scope_id = format!(
            "{}-{}",
            Utc::now().format(SCOPE_TIMESTAMP_FORMAT),
            std::process::id()
        );

        let dir = tempfile::Builder::new()
            .prefix(&format!("{DIR_PREFIX}{scope_id}-"))
            .tempdir()?;
        let path = dir.path().to_path_buf();

        register_workspace(&path);
        debug!("Created workspace {} [{scope_id}]", path.display());

        Ok(Self {
            scope_id,
            path,
            dir: Some(dir),
        })
    }

    /// Scope identifier for log correlation.
    #[must_use]
    pub fn scope_id(&self) -> &str {
        &self.scope_id
    }

    /// Root of the workspace directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path for the clip at `index`, keeping the source container
    /// extension so extracted streams stay compatible for concatenation.
    #[must_use]
    pub fn clip_path(&self, index: usize, extension: &str) -> PathBuf {
        self.path.join(format!("{CLIP_PREFIX}{index:03}.{extension}"))
    }

    /// Path of the concat demuxer manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILENAME)
    }

    /// Path of the merged artifact before delivery.
    #[must_use]
    pub fn merged_path(&self, extension: &str) -> PathBuf {
        self.path.join(format!("{MERGED_STEM}.{extension}"))
    }

    /// Release the workspace explicitly, logging (not surfacing) cleanup
    /// failures.
    pub fn close(mut self) {
        if let Some(dir) = self.dir.take() {
            let path = self.path.clone();
            if let Err(e) = dir.close() {
                warn!("Failed to clean up workspace {}: {e}", path.display());
            }
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        // TempDir removes the directory itself when still held here.
        unregister_workspace(&self.path);
    }
}

/// Global registry of live workspace paths for cleanup on signal.
static ACTIVE_WORKSPACES: std::sync::LazyLock<std::sync::Mutex<Vec<PathBuf>>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(Vec::new()));

/// Register a workspace path for cleanup on signal.
fn register_workspace(path: &Path) {
    if let Ok(mut workspaces) = ACTIVE_WORKSPACES.lock() {
        workspaces.push(path.to_path_buf());
    }
}

/// Unregister a workspace path after normal cleanup.
fn unregister_workspace(path: &Path) {
    if let Ok(mut workspaces) = ACTIVE_WORKSPACES.lock() {
        workspaces.retain(|p| p != path);
    }
}

/// Remove all registered workspaces. Called on signal.
pub fn cleanup_all_workspaces() {
    if let Ok(workspaces) = ACTIVE_WORKSPACES.lock() {
        for path in workspaces.iter() {
            let _ = std::fs::remove_dir_all(path);
        }
    }
}

//! Subprocess invocation with timeout.

use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Run an external tool to completion, capturing its output.
///
/// The invocation is bounded by `timeout`; on expiry the child is killed
/// (best-effort, via `kill_on_drop`) and a timeout error is returned. A
/// non-zero exit status is not an error here: callers inspect the returned
/// output and map failures to their own stage-specific variants.
pub(crate) async fn run_tool<I, S>(
    binary: &str,
    args: I,
    timeout: Duration,
) -> Result<std::process::Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(binary);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!("Running {binary} (timeout {}s)", timeout.as_secs());

    match tokio::time::timeout(timeout, cmd.output()).await {
        Err(_) => Err(Error::ToolTimeout {
            tool: binary.to_string(),
            timeout_secs: timeout.as_secs(),
        }),
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::ToolNotFound {
            tool: binary.to_string(),
        }),
        Ok(Err(e)) => Err(Error::Io(e)),
        Ok(Ok(output)) => Ok(output),
    }
}

/// Trimmed stderr of a failed invocation, suitable for error messages.
pub(crate) fn stderr_snippet(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        format!("exited with {}", output.status)
    } else {
        trimmed.to_string()
    }
}

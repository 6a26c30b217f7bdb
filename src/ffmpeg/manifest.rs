//! Concat demuxer manifest generation.

use std::path::Path;

/// Render an ordered clip list in ffmpeg concat demuxer format.
///
/// One `file '...'` line per clip, in the order given; single quotes in
/// paths are escaped the way the demuxer expects (`'\''`).
#[must_use]
pub fn format_concat_manifest<P: AsRef<Path>>(clips: &[P]) -> String {
    let mut manifest = String::new();
    for clip in clips {
        let escaped = clip.as_ref().to_string_lossy().replace('\'', "'\\''");
        manifest.push_str("file '");
        manifest.push_str(&escaped);
        manifest.push_str("'\n");
    }
    manifest
}

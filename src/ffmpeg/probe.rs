//! ffprobe output parsing.

use serde::Deserialize;

/// Top-level shape of `ffprobe -print_format json -show_format` output.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    format: Option<ProbeFormat>,
}

/// Container-level metadata. ffprobe prints numeric fields as strings.
#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<String>,
}

/// Extract the total duration in seconds from ffprobe JSON output.
///
/// Returns `None` if the JSON is malformed or carries no parsable
/// duration, e.g. for sources ffprobe could not decode.
pub(crate) fn parse_duration(json: &str) -> Option<f64> {
    let parsed: ProbeOutput = serde_json::from_str(json).ok()?;
    let duration = parsed.format?.duration?.parse::<f64>().ok()?;
    duration.is_finite().then_some(duration)
}

//! Time range type.

use serde::{Deserialize, Serialize};

use crate::constants::RANGE_SEPARATOR;

/// A half-open time interval `[start, end)` in seconds.
///
/// Used both for caller-supplied deletion windows and for the derived
/// retention windows. The JSON shape (`{"start": 3.0, "end": 5.0}`) matches
/// the wire format accepted by the `--ranges-json` input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the interval in seconds.
    pub start: f64,
    /// End of the interval in seconds.
    pub end: f64,
}

impl TimeRange {
    /// Create a new time range.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the interval has positive extent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start >= 0.0 && self.start < self.end
    }

    /// Clamp the interval to `[0, limit]`, returning `None` if nothing
    /// remains.
    #[must_use]
    pub fn clamped(&self, limit: f64) -> Option<Self> {
        let start = self.start.max(0.0);
        let end = self.end.min(limit);
        (start < end).then_some(Self { start, end })
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}{RANGE_SEPARATOR}{:.3}", self.start, self.end)
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    /// Parse a `START-END` pair of decimal seconds, e.g. `3-5` or `2.5-10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_str, end_str) = s
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| format!("'{s}' is not a START{RANGE_SEPARATOR}END range"))?;

        let start: f64 = start_str
            .trim()
            .parse()
            .map_err(|_| format!("'{start_str}' is not a valid number of seconds"))?;
        let end: f64 = end_str
            .trim()
            .parse()
            .map_err(|_| format!("'{end_str}' is not a valid number of seconds"))?;

        if start < 0.0 {
            return Err(format!("range start must not be negative, got {start}"));
        }
        if end <= start {
            return Err(format!(
                "range end must be greater than start, got {start}{RANGE_SEPARATOR}{end}"
            ));
        }

        Ok(Self { start, end })
    }
}

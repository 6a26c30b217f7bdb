//! Retention range resolution.
//!
//! Computes the complement of the deletion ranges over `[0, duration)`:
//! the ordered list of ranges the pipeline must keep.

use serde::{Deserialize, Serialize};

use super::TimeRange;

/// How deletion ranges are interpreted when computing the complement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplementMode {
    /// Sort, clamp and merge overlapping deletions before computing the
    /// complement. This is the corrected behavior and the default.
    #[default]
    Normalized,
    /// Walk deletions in caller-supplied order with a running cursor,
    /// without sorting or overlap merging.
    ///
    /// Compatibility mode: out-of-order or overlapping input silently moves
    /// the cursor backward and can emit overlapping retention ranges. Kept
    /// only so existing callers see identical output.
    Sequential,
}

impl std::fmt::Display for ComplementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normalized => write!(f, "normalized"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for ComplementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normalized" => Ok(Self::Normalized),
            "sequential" | "legacy" => Ok(Self::Sequential),
            other => Err(format!("unknown complement mode: {other}")),
        }
    }
}

/// Resolve the ordered retention ranges for `duration` seconds of audio
/// given the ranges to delete.
///
/// An empty deletion list keeps the whole source; deletions covering the
/// whole source yield an empty result, which the pipeline reports as an
/// empty-selection error.
#[must_use]
pub fn resolve_retained(
    duration: f64,
    deletions: &[TimeRange],
    mode: ComplementMode,
) -> Vec<TimeRange> {
    match mode {
        ComplementMode::Sequential => complement_in_order(duration, deletions),
        ComplementMode::Normalized => {
            let merged = normalize_deletions(duration, deletions);
            complement_in_order(duration, &merged)
        }
    }
}

/// Cursor walk over the deletion list in the order given.
///
/// A retention range is emitted for every gap in front of a deletion, and
/// the cursor advances to the deletion's end unconditionally. The final gap
/// up to `duration` is emitted last. With sorted disjoint input this is the
/// exact complement; unsorted input reproduces the legacy behavior.
fn complement_in_order(duration: f64, deletions: &[TimeRange]) -> Vec<TimeRange> {
    let mut retained = Vec::new();
    let mut cursor = 0.0_f64;

    for deletion in deletions {
        if deletion.start > cursor {
            retained.push(TimeRange::new(cursor, deletion.start));
        }
        cursor = deletion.end;
    }

    if cursor < duration {
        retained.push(TimeRange::new(cursor, duration));
    }

    retained
}

/// Clamp deletions to `[0, duration]`, drop degenerate ones, sort by start
/// and merge overlapping or touching neighbors.
fn normalize_deletions(duration: f64, deletions: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = deletions
        .iter()
        .filter_map(|d| d.clamped(duration))
        .collect();

    sorted.sort_by(|a, b| {
        a.start
            .partial_cmp(&b.start)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for deletion in sorted {
        match merged.last_mut() {
            Some(last) if deletion.start <= last.end => {
                last.end = last.end.max(deletion.end);
            }
            _ => merged.push(deletion),
        }
    }

    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn ranges(pairs: &[(f64, f64)]) -> Vec<TimeRange> {
        pairs.iter().map(|&(s, e)| TimeRange::new(s, e)).collect()
    }

    #[test]
    fn test_empty_deletions_keep_everything() {
        for mode in [ComplementMode::Normalized, ComplementMode::Sequential] {
            let retained = resolve_retained(10.0, &[], mode);
            assert_eq!(retained, ranges(&[(0.0, 10.0)]));
        }
    }

    #[test]
    fn test_single_deletion_in_middle() {
        // duration=10, delete [3,5] -> keep [0,3] and [5,10]
        for mode in [ComplementMode::Normalized, ComplementMode::Sequential] {
            let retained = resolve_retained(10.0, &ranges(&[(3.0, 5.0)]), mode);
            assert_eq!(retained, ranges(&[(0.0, 3.0), (5.0, 10.0)]));
        }
    }

    #[test]
    fn test_full_coverage_yields_empty_set() {
        for mode in [ComplementMode::Normalized, ComplementMode::Sequential] {
            let retained = resolve_retained(10.0, &ranges(&[(0.0, 10.0)]), mode);
            assert!(retained.is_empty());
        }
    }

    #[test]
    fn test_deletion_at_start() {
        let retained = resolve_retained(6.0, &ranges(&[(0.0, 2.0)]), ComplementMode::Normalized);
        assert_eq!(retained, ranges(&[(2.0, 6.0)]));
    }

    #[test]
    fn test_deletion_at_end() {
        let retained = resolve_retained(6.0, &ranges(&[(4.0, 6.0)]), ComplementMode::Normalized);
        assert_eq!(retained, ranges(&[(0.0, 4.0)]));
    }

    #[test]
    fn test_zero_width_deletion_only_moves_cursor() {
        let retained = resolve_retained(10.0, &ranges(&[(4.0, 4.0)]), ComplementMode::Sequential);
        assert_eq!(retained, ranges(&[(0.0, 4.0), (4.0, 10.0)]));
    }

    #[test]
    fn test_sequential_preserves_caller_order() {
        // Out-of-order input: the cursor jumps to 8, then back to 4, so the
        // legacy walk emits overlapping retention ranges. This is the
        // reference behavior and must not be "fixed" in this mode.
        let retained = resolve_retained(
            10.0,
            &ranges(&[(6.0, 8.0), (2.0, 4.0)]),
            ComplementMode::Sequential,
        );
        assert_eq!(retained, ranges(&[(0.0, 6.0), (4.0, 10.0)]));
    }

    #[test]
    fn test_normalized_sorts_unordered_input() {
        let retained = resolve_retained(
            10.0,
            &ranges(&[(6.0, 8.0), (2.0, 4.0)]),
            ComplementMode::Normalized,
        );
        assert_eq!(retained, ranges(&[(0.0, 2.0), (4.0, 6.0), (8.0, 10.0)]));
    }

    #[test]
    fn test_normalized_merges_overlapping_deletions() {
        let retained = resolve_retained(
            10.0,
            &ranges(&[(1.0, 4.0), (3.0, 6.0)]),
            ComplementMode::Normalized,
        );
        assert_eq!(retained, ranges(&[(0.0, 1.0), (6.0, 10.0)]));
    }

    #[test]
    fn test_normalized_merges_touching_deletions() {
        let retained = resolve_retained(
            10.0,
            &ranges(&[(1.0, 4.0), (4.0, 6.0)]),
            ComplementMode::Normalized,
        );
        assert_eq!(retained, ranges(&[(0.0, 1.0), (6.0, 10.0)]));
    }

    #[test]
    fn test_normalized_clamps_out_of_bounds_deletions() {
        let retained = resolve_retained(
            10.0,
            &ranges(&[(8.0, 15.0), (12.0, 20.0)]),
            ComplementMode::Normalized,
        );
        assert_eq!(retained, ranges(&[(0.0, 8.0)]));
    }

    #[test]
    fn test_retained_ranges_are_disjoint_and_sorted_in_normalized_mode() {
        let retained = resolve_retained(
            60.0,
            &ranges(&[(50.0, 55.0), (10.0, 20.0), (18.0, 25.0), (40.0, 41.0)]),
            ComplementMode::Normalized,
        );
        for pair in retained.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for range in &retained {
            assert!(range.is_valid());
        }
    }

    #[test]
    fn test_complement_is_idempotent() {
        // Re-deleting the complement of the retained set reproduces the
        // original deletion coverage.
        let deletions = ranges(&[(2.0, 4.0), (6.0, 7.0)]);
        let retained = resolve_retained(10.0, &deletions, ComplementMode::Normalized);
        let recovered = resolve_retained(10.0, &retained, ComplementMode::Normalized);
        assert_eq!(recovered, deletions);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "normalized".parse::<ComplementMode>().ok(),
            Some(ComplementMode::Normalized)
        );
        assert_eq!(
            "sequential".parse::<ComplementMode>().ok(),
            Some(ComplementMode::Sequential)
        );
        assert_eq!(
            "legacy".parse::<ComplementMode>().ok(),
            Some(ComplementMode::Sequential)
        );
        assert!("other".parse::<ComplementMode>().is_err());
    }
}

//! Tests for retention range resolution.

use audiocut::timeline::{ComplementMode, TimeRange, resolve_retained};

fn ranges(pairs: &[(f64, f64)]) -> Vec<TimeRange> {
    pairs.iter().map(|&(s, e)| TimeRange::new(s, e)).collect()
}

#[test]
fn test_no_deletions_keeps_whole_source() {
    for duration in [0.5, 10.0, 3600.0] {
        let retained = resolve_retained(duration, &[], ComplementMode::Normalized);
        assert_eq!(retained, ranges(&[(0.0, duration)]));
    }
}

#[test]
fn test_middle_deletion_splits_source() {
    // duration=10, deletions=[{3,5}] -> [{0,3},{5,10}]
    let retained = resolve_retained(10.0, &ranges(&[(3.0, 5.0)]), ComplementMode::Normalized);
    assert_eq!(retained, ranges(&[(0.0, 3.0), (5.0, 10.0)]));
}

#[test]
fn test_full_coverage_keeps_nothing() {
    let retained = resolve_retained(5.0, &ranges(&[(0.0, 5.0)]), ComplementMode::Normalized);
    assert!(retained.is_empty());

    let retained = resolve_retained(5.0, &ranges(&[(0.0, 3.0), (3.0, 5.0)]), ComplementMode::Normalized);
    assert!(retained.is_empty());
}

#[test]
fn test_multiple_deletions_keep_the_gaps() {
    let retained = resolve_retained(
        30.0,
        &ranges(&[(5.0, 10.0), (15.0, 20.0), (25.0, 30.0)]),
        ComplementMode::Normalized,
    );
    assert_eq!(
        retained,
        ranges(&[(0.0, 5.0), (10.0, 15.0), (20.0, 25.0)])
    );
}

#[test]
fn test_complement_is_idempotent() {
    let cases: Vec<Vec<TimeRange>> = vec![
        ranges(&[(2.0, 4.0)]),
        ranges(&[(0.0, 1.0), (5.0, 6.0)]),
        ranges(&[(1.5, 2.5), (4.0, 7.25), (8.0, 9.0)]),
    ];

    for deletions in cases {
        let retained = resolve_retained(10.0, &deletions, ComplementMode::Normalized);
        let recovered = resolve_retained(10.0, &retained, ComplementMode::Normalized);
        assert_eq!(recovered, deletions, "complement of complement must match");
    }
}

#[test]
fn test_normalized_output_is_sorted_and_disjoint() {
    let retained = resolve_retained(
        100.0,
        &ranges(&[(80.0, 90.0), (10.0, 30.0), (25.0, 40.0), (95.0, 120.0)]),
        ComplementMode::Normalized,
    );

    for range in &retained {
        assert!(range.start < range.end);
    }
    for pair in retained.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    let kept: f64 = retained.iter().map(TimeRange::duration).sum();
    assert!((kept - 45.0).abs() < 1e-9);
}

#[test]
fn test_sequential_mode_matches_reference_on_sorted_input() {
    let deletions = ranges(&[(2.0, 4.0), (6.0, 7.0)]);
    let sequential = resolve_retained(10.0, &deletions, ComplementMode::Sequential);
    let normalized = resolve_retained(10.0, &deletions, ComplementMode::Normalized);
    assert_eq!(sequential, normalized);
    assert_eq!(sequential, ranges(&[(0.0, 2.0), (4.0, 6.0), (7.0, 10.0)]));
}

#[test]
fn test_sequential_mode_diverges_on_unsorted_input() {
    // The legacy cursor walk trusts caller order: after jumping to 8 the
    // cursor moves back to 4, so the modes disagree.
    let deletions = ranges(&[(6.0, 8.0), (2.0, 4.0)]);

    let sequential = resolve_retained(10.0, &deletions, ComplementMode::Sequential);
    assert_eq!(sequential, ranges(&[(0.0, 6.0), (4.0, 10.0)]));

    let normalized = resolve_retained(10.0, &deletions, ComplementMode::Normalized);
    assert_eq!(normalized, ranges(&[(0.0, 2.0), (4.0, 6.0), (8.0, 10.0)]));
}

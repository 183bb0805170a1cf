//! Unit tests for pace range generation.

use proptest::prelude::*;
use rustpace::pace::{
    generate_paces, PaceRangeConfig, PaceRangeIssue, ABS_MAX_SECONDS, ABS_MIN_SECONDS,
};

fn seconds(config: PaceRangeConfig) -> Vec<u32> {
    generate_paces(&config).iter().map(|p| p.total_seconds).collect()
}

#[test]
fn test_default_rows_step_by_fifteen() {
    let rows = seconds(PaceRangeConfig::default());
    assert_eq!(rows.first(), Some(&420));
    assert_eq!(rows.last(), Some(&180));
    assert!(rows.windows(2).all(|w| w[0] - w[1] == 15));
}

#[test]
fn test_labels() {
    let labels: Vec<String> = generate_paces(&PaceRangeConfig::new(245, 230, 10))
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(labels, vec!["4:05", "3:55", "3:50"]);
}

#[test]
fn test_full_domain_at_one_second() {
    let rows = seconds(PaceRangeConfig::new(600, 60, 1));
    assert_eq!(rows.len(), (ABS_MAX_SECONDS - ABS_MIN_SECONDS + 1) as usize);
    assert_eq!(rows.first(), Some(&540));
    assert_eq!(rows.last(), Some(&120));
}

#[test]
fn test_step_larger_than_range() {
    assert_eq!(seconds(PaceRangeConfig::new(300, 270, 60)), vec![300, 270]);
}

#[test]
fn test_domain_edges_are_valid() {
    assert_eq!(seconds(PaceRangeConfig::new(120, 100, 5)), vec![120]);
    assert_eq!(seconds(PaceRangeConfig::new(600, 540, 5)), vec![540]);
}

#[test]
fn test_issue_reporting() {
    assert_eq!(
        PaceRangeConfig::new(420, 180, -5).clamped_bounds(),
        Err(PaceRangeIssue::NonPositiveInterval(-5))
    );
    assert_eq!(
        PaceRangeConfig::new(119, 60, 5).clamped_bounds(),
        Err(PaceRangeIssue::BelowDomain(119))
    );
    assert_eq!(
        PaceRangeConfig::new(600, 541, 5).clamped_bounds(),
        Err(PaceRangeIssue::AboveDomain(541))
    );
    assert_eq!(
        PaceRangeConfig::new(200, 300, 5).clamped_bounds(),
        Err(PaceRangeIssue::Inverted { max: 200, min: 300 })
    );
    assert!(!PaceRangeConfig::new(200, 300, 5).is_valid());
}

proptest! {
    #[test]
    fn prop_valid_ranges_are_strictly_descending_with_both_bounds(
        min in 0i32..700,
        span in 0i32..700,
        interval in 1i32..120
    ) {
        let max = min + span;
        prop_assume!(max >= ABS_MIN_SECONDS && min <= ABS_MAX_SECONDS);

        let rows = seconds(PaceRangeConfig::new(max, min, interval));
        let start = max.min(ABS_MAX_SECONDS) as u32;
        let end = min.max(ABS_MIN_SECONDS) as u32;

        prop_assert!(rows.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(rows.first().copied(), Some(start));
        prop_assert_eq!(rows.last().copied(), Some(end));
    }

    #[test]
    fn prop_invalid_ranges_are_empty(
        max in -100i32..800,
        min in -100i32..800,
        interval in -10i32..60
    ) {
        let config = PaceRangeConfig::new(max, min, interval);
        let invalid = max < min
            || interval <= 0
            || max < ABS_MIN_SECONDS
            || min > ABS_MAX_SECONDS;

        prop_assert_eq!(generate_paces(&config).is_empty(), invalid);
    }

    #[test]
    fn prop_generation_is_idempotent(max in 120i32..540, span in 0i32..200, interval in 1i32..30) {
        let config = PaceRangeConfig::new(max, max - span, interval);
        prop_assert_eq!(generate_paces(&config), generate_paces(&config));
    }
}

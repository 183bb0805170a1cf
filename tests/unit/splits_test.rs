//! Unit tests for split generation.

use rustpace::distances::{intermediate_splits, DistanceCatalog, SplitSpec};

fn assert_well_formed(race_meters: f64, race_label: &str, interval: f64) {
    let splits = intermediate_splits(race_meters, race_label, interval);

    assert!(!splits.is_empty());
    assert!(splits.windows(2).all(|w| w[0].meters < w[1].meters));
    assert_eq!(splits.last().map(|s| s.meters), Some(race_meters));
    assert_eq!(splits.iter().filter(|s| s.label == race_label).count(), 1);
    assert_eq!(splits.last().map(|s| s.label.as_str()), Some(race_label));
}

#[test]
fn test_ten_km_by_kilometer() {
    let splits = intermediate_splits(10000.0, "10km", 1000.0);
    assert_eq!(splits.len(), 10);
    assert_eq!(splits.last().unwrap().label, "10km");
    assert_eq!(splits[4].label, "5km");
    assert_eq!(splits[4].meters, 5000.0);
}

#[test]
fn test_five_km_by_three() {
    let splits = intermediate_splits(5000.0, "5km", 3000.0);
    let pairs: Vec<(&str, f64)> = splits.iter().map(|s| (s.label.as_str(), s.meters)).collect();
    assert_eq!(pairs, vec![("3km", 3000.0), ("5km", 5000.0)]);
}

#[test]
fn test_half_marathon_keeps_fraction() {
    let splits = intermediate_splits(21097.5, "Semi", 1000.0);
    assert_eq!(splits.len(), 22);
    assert_eq!(splits[20].label, "21km");
    assert_eq!(splits[21].label, "Semi");
    assert_eq!(splits[21].meters, 21097.5);
}

#[test]
fn test_every_catalog_race_is_well_formed() {
    for race in DistanceCatalog::official().all() {
        for interval in [100.0, 200.0, 400.0, 800.0, 1000.0] {
            assert_well_formed(race.meters, &race.label, interval);
        }
    }
}

#[test]
fn test_split_spec_for_race() {
    let marathon = DistanceCatalog::official().lookup("marathon").unwrap();
    let spec = SplitSpec::for_race(marathon, 5000.0);
    let splits = spec.generate();

    assert_eq!(spec.race_label, "Marathon");
    assert_eq!(splits.len(), 9);
    assert_eq!(splits[7].label, "40km");
    assert_eq!(splits[8].label, "Marathon");
}

#[test]
fn test_degenerate_inputs_are_empty() {
    assert!(intermediate_splits(-1.0, "x", 100.0).is_empty());
    assert!(intermediate_splits(1000.0, "x", 0.0).is_empty());
}

#[test]
fn test_idempotent() {
    assert_eq!(
        intermediate_splits(15000.0, "15km", 400.0),
        intermediate_splits(15000.0, "15km", 400.0)
    );
}

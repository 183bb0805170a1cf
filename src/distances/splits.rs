//! Intermediate checkpoint generation for a race.

use serde::{Deserialize, Serialize};

use super::catalog::DistanceEntry;

/// A checkpoint distance within a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Display label ("3km", "400m", or the race label for the finish)
    pub label: String,
    /// Distance from the start in meters
    pub meters: f64,
}

/// How a race is broken into checkpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSpec {
    pub race_meters: f64,
    pub race_label: String,
    pub interval_meters: f64,
}

impl SplitSpec {
    pub fn new(race_meters: f64, race_label: impl Into<String>, interval_meters: f64) -> Self {
        Self {
            race_meters,
            race_label: race_label.into(),
            interval_meters,
        }
    }

    /// Split a catalog race at the given interval.
    pub fn for_race(race: &DistanceEntry, interval_meters: f64) -> Self {
        Self::new(race.meters, race.label.clone(), interval_meters)
    }

    /// Generate the checkpoints. See [`intermediate_splits`].
    pub fn generate(&self) -> Vec<Split> {
        intermediate_splits(self.race_meters, &self.race_label, self.interval_meters)
    }
}

/// Label a checkpoint: kilometers from 1000 m up, meters below.
pub fn split_label(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{}km", meters / 1000.0)
    } else {
        format!("{}m", meters)
    }
}

/// Checkpoints every `interval_meters` up to the race distance.
///
/// The sequence is strictly increasing, ends exactly at `race_meters`, and
/// exactly one entry (the last) carries `race_label`. Non-positive inputs
/// yield an empty sequence.
pub fn intermediate_splits(race_meters: f64, race_label: &str, interval_meters: f64) -> Vec<Split> {
    if !interval_meters.is_finite()
        || interval_meters <= 0.0
        || !race_meters.is_finite()
        || race_meters <= 0.0
    {
        return Vec::new();
    }

    let count = (race_meters / interval_meters).floor() as u64;
    let mut splits: Vec<Split> = (1..=count)
        .map(|k| k as f64 * interval_meters)
        .filter(|&d| d <= race_meters)
        .map(|d| Split {
            label: split_label(d),
            meters: d,
        })
        .collect();

    match splits.last_mut() {
        Some(last) if last.meters == race_meters => last.label = race_label.to_string(),
        _ => splits.push(Split {
            label: race_label.to_string(),
            meters: race_meters,
        }),
    }

    splits
}

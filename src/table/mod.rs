//! Table assembly and the calls the presentation layer makes.

pub mod assembler;

pub use assembler::{
    distances_for_mode, Cell, DistanceSelection, PaceTable, TableAssembler, TableMode,
    TableRequest, TableStatus, UnknownModeError, DEFAULT_SPLIT_INTERVAL_M,
};

use crate::distances::{DistanceCatalog, DistanceEntry};
use crate::metrics::{Color, PaceColorMapper, TimeCalculator};
use crate::pace::{generate_paces, PaceEntry, PaceRangeConfig};

/// Distance columns for a mode over the built-in catalogs.
pub fn list_distances(
    mode: TableMode,
    selection: &DistanceSelection,
) -> Result<Vec<DistanceEntry>, TableStatus> {
    distances_for_mode(
        DistanceCatalog::official(),
        DistanceCatalog::training(),
        mode,
        selection,
    )
}

/// Pace rows, slowest first.
pub fn list_paces(config: &PaceRangeConfig) -> Vec<PaceEntry> {
    generate_paces(config)
}

/// Seconds to cover `meters` at `pace_seconds` per km.
pub fn time_for(meters: f64, pace_seconds: f64) -> Option<f64> {
    TimeCalculator::time(meters, pace_seconds)
}

pub fn format_duration(seconds: f64) -> String {
    TimeCalculator::format_duration(seconds)
}

/// Effort color for a pace over a distance.
pub fn color_for(pace_seconds: f64, distance: &DistanceEntry, vma: f64) -> Option<Color> {
    PaceColorMapper::color_for(pace_seconds, distance, vma)
}

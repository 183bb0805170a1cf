//! RustPace - Pace Reference Tables for Runners
//!
//! Computes grids of predicted finish and split times for a range of paces
//! over official race distances, short training distances, or the
//! checkpoints of a chosen race, optionally shaded against a runner's
//! sustainable effort range derived from their VMA.

pub mod distances;
pub mod metrics;
pub mod pace;
pub mod storage;
pub mod table;
pub mod ui;

// Re-export commonly used types
pub use distances::{DistanceCatalog, DistanceEntry};
pub use metrics::{Color, PaceColorMapper, TimeCalculator};
pub use pace::{PaceEntry, PaceRangeConfig};
pub use storage::UserPreferences;
pub use table::{
    color_for, format_duration, list_distances, list_paces, time_for, PaceTable, TableAssembler,
    TableMode, TableRequest, TableStatus,
};

//! Distance catalogs and split generation.

pub mod catalog;
pub mod splits;

pub use catalog::{CatalogError, DistanceCatalog, DistanceEntry, EffortBounds};
pub use splits::{intermediate_splits, Split, SplitSpec};

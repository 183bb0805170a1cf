//! Race distance catalogs.
//!
//! Two disjoint catalogs exist: official race distances, which carry the
//! sustainable-effort bounds (% VMA) used for color mapping, and short
//! training distances used for interval tables. Catalogs are validated once
//! when built and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sustainable effort range for a distance, as a percentage of VMA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortBounds {
    /// Lowest sustainable percentage of VMA (slow end)
    pub min_soutien: f64,
    /// Highest sustainable percentage of VMA (fast end)
    pub max_soutien: f64,
}

impl EffortBounds {
    pub const fn new(min_soutien: f64, max_soutien: f64) -> Self {
        Self {
            min_soutien,
            max_soutien,
        }
    }

    /// Both percentages positive and finite, with `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min_soutien.is_finite()
            && self.max_soutien.is_finite()
            && self.min_soutien > 0.0
            && self.min_soutien <= self.max_soutien
    }
}

/// A single catalog distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// Lookup key
    pub key: String,
    /// Display label
    pub label: String,
    /// Length in meters
    pub meters: f64,
    /// Effort bounds (official distances only)
    pub bounds: Option<EffortBounds>,
}

impl DistanceEntry {
    /// Create a distance without effort bounds.
    pub fn new(key: impl Into<String>, label: impl Into<String>, meters: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            meters,
            bounds: None,
        }
    }

    /// Attach effort bounds (% VMA).
    pub fn with_bounds(mut self, min_soutien: f64, max_soutien: f64) -> Self {
        self.bounds = Some(EffortBounds::new(min_soutien, max_soutien));
        self
    }

    pub fn min_soutien(&self) -> Option<f64> {
        self.bounds.map(|b| b.min_soutien)
    }

    pub fn max_soutien(&self) -> Option<f64> {
        self.bounds.map(|b| b.max_soutien)
    }
}

/// Catalog construction errors.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate distance key: {0}")]
    DuplicateKey(String),

    #[error("distance {key} has invalid length: {meters} m")]
    InvalidMeters { key: String, meters: f64 },

    #[error("distance {key} has invalid effort bounds: {min}-{max}%")]
    InvalidBounds { key: String, min: f64, max: f64 },

    #[error("distance {0} declares only one effort bound")]
    PartialBounds(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Ordered, immutable distance registry. Insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceCatalog {
    entries: Vec<DistanceEntry>,
}

static OFFICIAL: OnceLock<DistanceCatalog> = OnceLock::new();
static TRAINING: OnceLock<DistanceCatalog> = OnceLock::new();

impl DistanceCatalog {
    /// Build a catalog, rejecting duplicate keys, bad lengths and bad bounds.
    pub fn new(entries: Vec<DistanceEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey(entry.key.clone()));
            }
            if !entry.meters.is_finite() || entry.meters <= 0.0 {
                return Err(CatalogError::InvalidMeters {
                    key: entry.key.clone(),
                    meters: entry.meters,
                });
            }
            if let Some(bounds) = entry.bounds {
                if !bounds.is_valid() {
                    return Err(CatalogError::InvalidBounds {
                        key: entry.key.clone(),
                        min: bounds.min_soutien,
                        max: bounds.max_soutien,
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Official race distances with effort bounds.
    pub fn official() -> &'static DistanceCatalog {
        OFFICIAL.get_or_init(|| {
            DistanceCatalog::new(official_entries()).expect("built-in official catalog is valid")
        })
    }

    /// Short training distances (100 m to 5000 m), no bounds.
    pub fn training() -> &'static DistanceCatalog {
        TRAINING.get_or_init(|| {
            DistanceCatalog::new(training_entries()).expect("built-in training catalog is valid")
        })
    }

    /// Find a distance by key.
    pub fn lookup(&self, key: &str) -> Option<&DistanceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// All distances in display order.
    pub fn all(&self) -> &[DistanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a catalog from TOML (`[[distance]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let entries = file
            .distances
            .into_iter()
            .map(RawDistance::into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "distance", default)]
    distances: Vec<RawDistance>,
}

#[derive(Debug, Deserialize)]
struct RawDistance {
    key: String,
    label: Option<String>,
    meters: f64,
    min_soutien: Option<f64>,
    max_soutien: Option<f64>,
}

impl RawDistance {
    fn into_entry(self) -> Result<DistanceEntry, CatalogError> {
        let label = self.label.unwrap_or_else(|| self.key.clone());
        let entry = DistanceEntry::new(self.key, label, self.meters);

        match (self.min_soutien, self.max_soutien) {
            (Some(min), Some(max)) => Ok(entry.with_bounds(min, max)),
            (None, None) => Ok(entry),
            _ => Err(CatalogError::PartialBounds(entry.key)),
        }
    }
}

fn official_entries() -> Vec<DistanceEntry> {
    vec![
        DistanceEntry::new("1500m", "1500m", 1500.0).with_bounds(100.0, 106.0),
        DistanceEntry::new("3000m", "3000m", 3000.0).with_bounds(95.0, 100.0),
        DistanceEntry::new("5km", "5km", 5000.0).with_bounds(91.0, 96.0),
        DistanceEntry::new("10km", "10km", 10000.0).with_bounds(87.0, 92.0),
        DistanceEntry::new("15km", "15km", 15000.0).with_bounds(84.0, 89.0),
        DistanceEntry::new("semi", "Semi", 21097.5).with_bounds(80.0, 86.0),
        DistanceEntry::new("marathon", "Marathon", 42195.0).with_bounds(75.0, 81.0),
    ]
}

fn training_entries() -> Vec<DistanceEntry> {
    [100, 200, 300, 400, 500, 600, 800, 1000, 1500, 2000, 3000, 5000]
        .into_iter()
        .map(|m| {
            let key = format!("{m}m");
            DistanceEntry::new(key.clone(), key, f64::from(m))
        })
        .collect()
}

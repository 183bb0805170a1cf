//! Pace × distance table assembly.
//!
//! The assembler crosses the pace rows with the distance columns of the
//! current mode and formats one time per cell. Each derived list is rebuilt
//! wholesale whenever one of its inputs changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distances::{intermediate_splits, DistanceCatalog, DistanceEntry};
use crate::metrics::{Color, PaceColorMapper, TimeCalculator};
use crate::pace::{generate_paces, PaceEntry, PaceRangeConfig, PaceRangeIssue};

/// Default distance between split checkpoints.
pub const DEFAULT_SPLIT_INTERVAL_M: f64 = 1000.0;

/// Which distances make up the table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    /// Official race distances, color mapping available
    #[default]
    Official,
    /// Short training distances
    Interval,
    /// Checkpoints of one selected race
    Intermediate,
}

impl TableMode {
    pub const ALL: [TableMode; 3] = [TableMode::Official, TableMode::Interval, TableMode::Intermediate];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableMode::Official => "official",
            TableMode::Interval => "interval",
            TableMode::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table mode: {0} (expected official, interval or intermediate)")]
pub struct UnknownModeError(pub String);

impl FromStr for TableMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownModeError(s.to_string()))
    }
}

/// Race choice and checkpoint spacing for intermediate mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceSelection {
    /// Official catalog key of the race to split
    pub race_key: Option<String>,
    /// Checkpoint spacing in meters
    pub split_interval_m: f64,
}

impl Default for DistanceSelection {
    fn default() -> Self {
        Self {
            race_key: None,
            split_interval_m: DEFAULT_SPLIT_INTERVAL_M,
        }
    }
}

impl DistanceSelection {
    pub fn race(key: impl Into<String>, split_interval_m: f64) -> Self {
        Self {
            race_key: Some(key.into()),
            split_interval_m,
        }
    }
}

/// Outcome of a table build. Anything but `Ready` means no cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableStatus {
    #[default]
    Ready,
    /// The pace bounds or step produce no rows
    InvalidPaceConfig(PaceRangeIssue),
    /// Intermediate mode without a chosen race
    AwaitingSelection,
    /// Intermediate mode with a race key missing from the catalog
    UnknownRace(String),
    /// The mode yields no distance columns
    NoDistances,
}

impl TableStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, TableStatus::Ready)
    }
}

/// Everything a table build depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRequest {
    pub mode: TableMode,
    pub pace: PaceRangeConfig,
    pub selection: DistanceSelection,
    /// Reference sustainable speed in km/h
    pub vma: f64,
    pub color_enabled: bool,
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            mode: TableMode::Official,
            pace: PaceRangeConfig::default(),
            selection: DistanceSelection::default(),
            vma: 15.0,
            color_enabled: false,
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Raw time in seconds, `None` when undefined
    pub seconds: Option<f64>,
    /// Formatted time
    pub text: String,
    /// Effort color, if color mapping applies
    pub color: Option<Color>,
}

/// The assembled grid: one row per pace, one column per distance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaceTable {
    pub mode: TableMode,
    pub title: String,
    pub rows: Vec<PaceEntry>,
    pub columns: Vec<DistanceEntry>,
    /// `cells[row][column]`, empty unless the status is `Ready`
    pub cells: Vec<Vec<Cell>>,
    pub status: TableStatus,
}

impl PaceTable {
    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(column))
    }
}

/// Distance columns for `mode`, or why there are none.
pub fn distances_for_mode(
    official: &DistanceCatalog,
    training: &DistanceCatalog,
    mode: TableMode,
    selection: &DistanceSelection,
) -> Result<Vec<DistanceEntry>, TableStatus> {
    match mode {
        TableMode::Official => Ok(official.all().to_vec()),
        TableMode::Interval => Ok(training.all().to_vec()),
        TableMode::Intermediate => {
            let key = selection
                .race_key
                .as_deref()
                .ok_or(TableStatus::AwaitingSelection)?;
            let race = official
                .lookup(key)
                .ok_or_else(|| TableStatus::UnknownRace(key.to_string()))?;

            Ok(
                intermediate_splits(race.meters, &race.label, selection.split_interval_m)
                    .into_iter()
                    .map(|s| DistanceEntry::new(s.label.clone(), s.label, s.meters))
                    .collect(),
            )
        }
    }
}

/// Builds pace tables, reusing derived lists while their inputs are unchanged.
pub struct TableAssembler {
    official: DistanceCatalog,
    training: DistanceCatalog,
    pace_key: Option<PaceRangeConfig>,
    paces: Vec<PaceEntry>,
    distance_key: Option<(TableMode, DistanceSelection)>,
    distances: Result<Vec<DistanceEntry>, TableStatus>,
    table_key: Option<TableRequest>,
    table: PaceTable,
}

impl Default for TableAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl TableAssembler {
    /// Assembler over the built-in catalogs.
    pub fn new() -> Self {
        Self::with_catalog(DistanceCatalog::official().clone())
    }

    /// Assembler over a custom official catalog.
    pub fn with_catalog(official: DistanceCatalog) -> Self {
        Self {
            official,
            training: DistanceCatalog::training().clone(),
            pace_key: None,
            paces: Vec::new(),
            distance_key: None,
            distances: Ok(Vec::new()),
            table_key: None,
            table: PaceTable::default(),
        }
    }

    pub fn official(&self) -> &DistanceCatalog {
        &self.official
    }

    pub fn training(&self) -> &DistanceCatalog {
        &self.training
    }

    /// Build (or reuse) the table for `request`.
    pub fn assemble(&mut self, request: &TableRequest) -> &PaceTable {
        if self.table_key.as_ref() == Some(request) {
            tracing::debug!("Reusing pace table for unchanged request");
            return &self.table;
        }

        self.refresh_paces(&request.pace);
        self.refresh_distances(request.mode, &request.selection);
        self.table = self.build(request);
        self.table_key = Some(request.clone());

        &self.table
    }

    fn refresh_paces(&mut self, config: &PaceRangeConfig) {
        if self.pace_key.as_ref() == Some(config) {
            return;
        }
        self.paces = generate_paces(config);
        self.pace_key = Some(*config);
        tracing::debug!("Rebuilt {} pace rows for {:?}", self.paces.len(), config);
    }

    fn refresh_distances(&mut self, mode: TableMode, selection: &DistanceSelection) {
        if self
            .distance_key
            .as_ref()
            .is_some_and(|(m, s)| *m == mode && s == selection)
        {
            return;
        }
        self.distances = distances_for_mode(&self.official, &self.training, mode, selection);
        self.distance_key = Some((mode, selection.clone()));

        match &self.distances {
            Ok(columns) => tracing::debug!("Rebuilt {} {} columns", columns.len(), mode),
            Err(TableStatus::UnknownRace(key)) => tracing::warn!("Unknown race key: {}", key),
            Err(status) => tracing::debug!("No {} columns: {:?}", mode, status),
        }
    }

    fn build(&self, request: &TableRequest) -> PaceTable {
        let columns = self.distances.clone().unwrap_or_default();
        let status = self.status(request);

        let cells: Vec<Vec<Cell>> = if status.is_ready() {
            let colored = request.color_enabled && request.mode == TableMode::Official;
            self.paces
                .iter()
                .map(|pace| {
                    columns
                        .iter()
                        .map(|distance| build_cell(pace, distance, colored, request.vma))
                        .collect()
                })
                .collect()
        } else {
            Vec::new()
        };

        PaceTable {
            mode: request.mode,
            title: self.title(request),
            rows: self.paces.clone(),
            columns,
            cells,
            status,
        }
    }

    fn status(&self, request: &TableRequest) -> TableStatus {
        if let Err(TableStatus::AwaitingSelection) = &self.distances {
            return TableStatus::AwaitingSelection;
        }
        if let Err(issue) = request.pace.clamped_bounds() {
            return TableStatus::InvalidPaceConfig(issue);
        }
        match &self.distances {
            Err(status) => status.clone(),
            Ok(columns) if columns.is_empty() => TableStatus::NoDistances,
            Ok(_) => TableStatus::Ready,
        }
    }

    fn title(&self, request: &TableRequest) -> String {
        match request.mode {
            TableMode::Official => "Official distances".to_string(),
            TableMode::Interval => "Intervals".to_string(),
            TableMode::Intermediate => match request.selection.race_key.as_deref() {
                Some(key) => {
                    let label = self.official.lookup(key).map_or(key, |r| r.label.as_str());
                    format!("Splits: {label}")
                }
                None => "Splits: select a race".to_string(),
            },
        }
    }
}

fn build_cell(pace: &PaceEntry, distance: &DistanceEntry, colored: bool, vma: f64) -> Cell {
    let pace_seconds = f64::from(pace.total_seconds);
    let seconds = TimeCalculator::time(distance.meters, pace_seconds);

    Cell {
        seconds,
        text: TimeCalculator::format_time(seconds),
        color: if colored {
            PaceColorMapper::color_for(pace_seconds, distance, vma)
        } else {
            None
        },
    }
}

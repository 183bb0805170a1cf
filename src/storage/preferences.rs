//! Persisted user preferences behind a key-value store.
//!
//! The table core never touches storage; the presentation layer loads
//! [`UserPreferences`] from a [`PreferenceStore`] and writes them back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::pace::PaceRangeConfig;
use crate::table::{DistanceSelection, TableMode, TableRequest, DEFAULT_SPLIT_INTERVAL_M};

use super::config::Theme;

/// Preference keys.
pub mod keys {
    pub const PACE_MAX_SECONDS: &str = "pace_max_seconds";
    pub const PACE_MIN_SECONDS: &str = "pace_min_seconds";
    pub const PACE_INTERVAL_SECONDS: &str = "pace_interval_seconds";
    pub const VMA: &str = "vma";
    pub const THEME: &str = "theme";
    pub const COLOR_MODE: &str = "color_mode";
    pub const MODE: &str = "mode";
    pub const RACE: &str = "race";
    pub const SPLIT_INTERVAL_M: &str = "split_interval_m";
}

/// Minimal string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every stored value.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.values.clear();
        Ok(())
    }
}

/// Flat string map persisted as a TOML file, rewritten on every change.
#[derive(Debug)]
pub struct TomlStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlStore {
    /// Default location inside `data_dir`.
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("preferences.toml")
    }

    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| StoreError::IoError(e.to_string()))?;
            toml::from_str(&content).map_err(|e| StoreError::ParseError(e.to_string()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::IoError(e.to_string()))?;
        }

        let content =
            toml::to_string(&self.values).map_err(|e| StoreError::SerializeError(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::IoError(e.to_string()))
    }
}

impl PreferenceStore for TomlStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.values.clear();
        self.flush()
    }
}

/// User choices that survive between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub pace: PaceRangeConfig,
    /// VMA in km/h
    pub vma: f64,
    pub theme: Theme,
    pub color_enabled: bool,
    pub mode: TableMode,
    pub race_key: Option<String>,
    pub split_interval_m: f64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            pace: PaceRangeConfig::default(),
            vma: 15.0,
            theme: Theme::Light,
            color_enabled: false,
            mode: TableMode::Official,
            race_key: None,
            split_interval_m: DEFAULT_SPLIT_INTERVAL_M,
        }
    }
}

impl UserPreferences {
    /// Read preferences, using defaults for missing or unreadable values.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();

        Self {
            pace: PaceRangeConfig {
                max_seconds: read(store, keys::PACE_MAX_SECONDS, defaults.pace.max_seconds),
                min_seconds: read(store, keys::PACE_MIN_SECONDS, defaults.pace.min_seconds),
                interval_seconds: read(
                    store,
                    keys::PACE_INTERVAL_SECONDS,
                    defaults.pace.interval_seconds,
                ),
            },
            vma: read_checked(store, keys::VMA, defaults.vma, Self::validate_vma),
            theme: read(store, keys::THEME, defaults.theme),
            color_enabled: read(store, keys::COLOR_MODE, defaults.color_enabled),
            mode: read(store, keys::MODE, defaults.mode),
            race_key: store
                .get(keys::RACE)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            split_interval_m: read_checked(
                store,
                keys::SPLIT_INTERVAL_M,
                defaults.split_interval_m,
                |m| m.is_finite() && m > 0.0,
            ),
        }
    }

    /// Write every preference to `store`.
    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<(), StoreError> {
        store.set(keys::PACE_MAX_SECONDS, &self.pace.max_seconds.to_string())?;
        store.set(keys::PACE_MIN_SECONDS, &self.pace.min_seconds.to_string())?;
        store.set(keys::PACE_INTERVAL_SECONDS, &self.pace.interval_seconds.to_string())?;
        store.set(keys::VMA, &self.vma.to_string())?;
        store.set(keys::THEME, &self.theme.to_string())?;
        store.set(keys::COLOR_MODE, &self.color_enabled.to_string())?;
        store.set(keys::MODE, self.mode.as_str())?;
        store.set(keys::RACE, self.race_key.as_deref().unwrap_or(""))?;
        store.set(keys::SPLIT_INTERVAL_M, &self.split_interval_m.to_string())?;
        Ok(())
    }

    /// Validate VMA value (positive, at most 30 km/h).
    pub fn validate_vma(vma: f64) -> bool {
        vma.is_finite() && vma > 0.0 && vma <= 30.0
    }

    /// Table inputs for these preferences.
    pub fn to_request(&self) -> TableRequest {
        TableRequest {
            mode: self.mode,
            pace: self.pace,
            selection: DistanceSelection {
                race_key: self.race_key.clone(),
                split_interval_m: self.split_interval_m,
            },
            vma: self.vma,
            color_enabled: self.color_enabled,
        }
    }
}

fn read<T: FromStr>(store: &dyn PreferenceStore, key: &str, default: T) -> T {
    match store.get(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unreadable preference {} = {:?}", key, raw);
            default
        }),
    }
}

/// Like [`read`], but also falls back when the parsed value fails `valid`.
fn read_checked<T>(store: &dyn PreferenceStore, key: &str, default: T, valid: fn(T) -> bool) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    let value = read(store, key, default);
    if valid(value) {
        value
    } else {
        tracing::warn!("Ignoring out-of-range preference {} = {:?}", key, value);
        default
    }
}

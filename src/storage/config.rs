//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. Missing files
//! and missing keys fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::table::{TableMode, DEFAULT_SPLIT_INTERVAL_M};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ConfigError::ParseError(format!("unknown theme: {other}"))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Optional TOML file replacing the built-in official distances
    pub catalog_path: Option<PathBuf>,
    /// Table settings
    pub table: TableSettings,
    /// Display settings
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            catalog_path: None,
            table: TableSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Table-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Mode used when no preference is stored
    pub default_mode: TableMode,
    /// Split intervals (meters) accepted in intermediate mode
    pub split_intervals_m: Vec<u32>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_mode: TableMode::Official,
            split_intervals_m: vec![100, 200, 400, 800, 1000],
        }
    }
}

impl TableSettings {
    /// Whether `meters` is one of the offered split intervals.
    pub fn allows_split(&self, meters: f64) -> bool {
        self.split_intervals_m
            .iter()
            .any(|&m| f64::from(m) == meters)
    }

    /// `meters` if it is an offered split interval, otherwise a fallback:
    /// the default interval when offered, else the first offered one.
    pub fn checked_split(&self, meters: f64) -> f64 {
        if self.allows_split(meters) {
            return meters;
        }

        let fallback = if self.allows_split(DEFAULT_SPLIT_INTERVAL_M) {
            DEFAULT_SPLIT_INTERVAL_M
        } else {
            self.split_intervals_m
                .first()
                .map_or(DEFAULT_SPLIT_INTERVAL_M, |&m| f64::from(m))
        };
        tracing::warn!(
            "Split interval {} m is not offered, using {} m",
            meters,
            fallback
        );
        fallback
    }
}

/// Terminal display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Emit ANSI colors
    pub ansi_colors: bool,
    /// Minimum width of a time column
    pub column_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            ansi_colors: true,
            column_width: 8,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rustpace", "RustPace")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load application configuration from `path`, or defaults if absent.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

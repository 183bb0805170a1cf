//! Storage module for configuration and user preferences.

pub mod config;
pub mod preferences;

pub use config::{AppConfig, ConfigError, DisplaySettings, TableSettings, Theme};
pub use preferences::{MemoryStore, PreferenceStore, StoreError, TomlStore, UserPreferences};

//! Unit tests for persisted preferences.

use rustpace::pace::PaceRangeConfig;
use rustpace::storage::preferences::keys;
use rustpace::storage::{
    MemoryStore, PreferenceStore, TableSettings, Theme, TomlStore, UserPreferences,
};
use rustpace::table::{TableAssembler, TableMode, DEFAULT_SPLIT_INTERVAL_M};
use tempfile::TempDir;

#[test]
fn test_toml_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs").join("preferences.toml");

    {
        let mut store = TomlStore::open(&path).unwrap();
        assert!(store.get(keys::VMA).is_none());
        store.set(keys::VMA, "16.5").unwrap();
        store.set(keys::THEME, "dark").unwrap();
    }

    let store = TomlStore::open(&path).unwrap();
    assert_eq!(store.get(keys::VMA).as_deref(), Some("16.5"));
    assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_toml_store_clear() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut store = TomlStore::open(&path).unwrap();
    store.set(keys::MODE, "interval").unwrap();
    store.clear().unwrap();

    let reopened = TomlStore::open(&path).unwrap();
    assert!(reopened.get(keys::MODE).is_none());
}

#[test]
fn test_toml_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    assert!(TomlStore::open(&path).is_err());
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");

    let prefs = UserPreferences {
        pace: PaceRangeConfig::new(360, 200, 10),
        vma: 18.0,
        theme: Theme::Dark,
        color_enabled: true,
        mode: TableMode::Interval,
        race_key: None,
        split_interval_m: 200.0,
    };
    prefs.save(&mut TomlStore::open(&path).unwrap()).unwrap();

    let loaded = UserPreferences::load(&TomlStore::open(&path).unwrap());
    assert_eq!(loaded, prefs);
}

#[test]
fn test_request_from_preferences() {
    let mut store = MemoryStore::new();
    store.set(keys::MODE, "intermediate").unwrap();
    store.set(keys::RACE, "marathon").unwrap();
    store.set(keys::SPLIT_INTERVAL_M, "800").unwrap();
    store.set(keys::COLOR_MODE, "true").unwrap();

    let request = UserPreferences::load(&store).to_request();
    assert_eq!(request.mode, TableMode::Intermediate);
    assert_eq!(request.selection.race_key.as_deref(), Some("marathon"));
    assert_eq!(request.selection.split_interval_m, 800.0);
    assert!(request.color_enabled);
    assert_eq!(request.pace, PaceRangeConfig::default());
}

#[test]
fn test_blank_race_is_none() {
    let mut store = MemoryStore::new();
    store.set(keys::RACE, "  ").unwrap();
    store.set(keys::MODE, "sideways").unwrap();

    let prefs = UserPreferences::load(&store);
    assert_eq!(prefs.race_key, None);
    assert_eq!(prefs.mode, TableMode::Official);
}

#[test]
fn test_save_writes_every_key() {
    let mut store = MemoryStore::new();
    UserPreferences::default().save(&mut store).unwrap();
    assert_eq!(store.len(), 9);
    assert_eq!(store.get(keys::PACE_MAX_SECONDS).as_deref(), Some("420"));
    assert_eq!(store.get(keys::PACE_MIN_SECONDS).as_deref(), Some("180"));
    assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
}

#[test]
fn test_default_path_in_data_dir() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        TomlStore::default_path(dir.path()),
        dir.path().join("preferences.toml")
    );
}

#[test]
fn test_hand_edited_values_are_checked() {
    let mut store = MemoryStore::new();
    store.set(keys::MODE, "intermediate").unwrap();
    store.set(keys::RACE, "marathon").unwrap();
    store.set(keys::SPLIT_INTERVAL_M, "0.5").unwrap();
    store.set(keys::VMA, "250").unwrap();

    let mut prefs = UserPreferences::load(&store);
    assert_eq!(prefs.vma, 15.0);

    prefs.split_interval_m = TableSettings::default().checked_split(prefs.split_interval_m);
    assert_eq!(prefs.split_interval_m, DEFAULT_SPLIT_INTERVAL_M);

    let mut assembler = TableAssembler::new();
    let table = assembler.assemble(&prefs.to_request());
    assert!(table.is_ready());
    // 42 whole kilometers plus the finish
    assert_eq!(table.columns.len(), 43);
}

#[test]
fn test_non_positive_split_falls_back() {
    for raw in ["0", "-200", "NaN", "inf"] {
        let mut store = MemoryStore::new();
        store.set(keys::SPLIT_INTERVAL_M, raw).unwrap();
        assert_eq!(
            UserPreferences::load(&store).split_interval_m,
            DEFAULT_SPLIT_INTERVAL_M,
            "stored split {raw}"
        );
    }
}

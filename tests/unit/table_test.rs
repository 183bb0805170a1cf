//! Unit tests for table assembly.

use rustpace::distances::{DistanceCatalog, DistanceEntry};
use rustpace::pace::{PaceRangeConfig, PaceRangeIssue};
use rustpace::table::{DistanceSelection, TableAssembler, TableMode, TableRequest, TableStatus};
use rustpace::{list_distances, list_paces};

fn request(mode: TableMode) -> TableRequest {
    TableRequest {
        mode,
        pace: PaceRangeConfig::new(300, 240, 30),
        ..Default::default()
    }
}

#[test]
fn test_official_columns_follow_catalog() {
    let mut assembler = TableAssembler::new();
    let table = assembler.assemble(&request(TableMode::Official));

    let labels: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["1500m", "3000m", "5km", "10km", "15km", "Semi", "Marathon"]
    );
    assert_eq!(table.title, "Official distances");
}

#[test]
fn test_interval_table_never_colored() {
    let mut assembler = TableAssembler::new();
    let req = TableRequest {
        color_enabled: true,
        ..request(TableMode::Interval)
    };
    let table = assembler.assemble(&req);

    assert!(table.is_ready());
    assert_eq!(table.columns.len(), 12);
    assert!(table.cells.iter().flatten().all(|c| c.color.is_none()));
}

#[test]
fn test_intermediate_table_never_colored() {
    let mut assembler = TableAssembler::new();
    let req = TableRequest {
        color_enabled: true,
        selection: DistanceSelection::race("10km", 1000.0),
        pace: PaceRangeConfig::new(280, 250, 1),
        ..request(TableMode::Intermediate)
    };
    let table = assembler.assemble(&req);

    assert!(table.is_ready());
    assert!(table.cells.iter().flatten().all(|c| c.color.is_none()));
}

#[test]
fn test_official_color_only_when_enabled() {
    let mut assembler = TableAssembler::new();
    let base = TableRequest {
        pace: PaceRangeConfig::new(300, 200, 1),
        ..request(TableMode::Official)
    };

    let plain = assembler.assemble(&base).clone();
    assert!(plain.cells.iter().flatten().all(|c| c.color.is_none()));

    let colored = assembler.assemble(&TableRequest {
        color_enabled: true,
        ..base
    });
    assert!(colored.cells.iter().flatten().any(|c| c.color.is_some()));
    assert!(colored.cells.iter().flatten().any(|c| c.color.is_none()));
}

#[test]
fn test_intermediate_splits_columns() {
    let mut assembler = TableAssembler::new();
    let req = TableRequest {
        selection: DistanceSelection::race("5km", 400.0),
        ..request(TableMode::Intermediate)
    };
    let table = assembler.assemble(&req);

    assert_eq!(table.title, "Splits: 5km");
    assert_eq!(table.columns.len(), 13);
    assert_eq!(table.columns[0].label, "400m");
    assert_eq!(table.columns[12].label, "5km");

    // 400 m at 5:00/km
    assert_eq!(table.cell(0, 0).map(|c| c.text.as_str()), Some("02:00"));
    // 5 km at 4:00/km
    let last_row = table.rows.len() - 1;
    assert_eq!(table.cell(last_row, 12).map(|c| c.text.as_str()), Some("20:00"));
}

#[test]
fn test_awaiting_selection() {
    let mut assembler = TableAssembler::new();
    let table = assembler.assemble(&request(TableMode::Intermediate));

    assert_eq!(table.status, TableStatus::AwaitingSelection);
    assert!(table.columns.is_empty());
    assert!(table.cells.is_empty());
    assert_eq!(table.title, "Splits: select a race");
}

#[test]
fn test_invalid_pace_config() {
    let mut assembler = TableAssembler::new();
    let req = TableRequest {
        pace: PaceRangeConfig::new(420, 180, 0),
        ..request(TableMode::Official)
    };
    let table = assembler.assemble(&req);

    assert_eq!(
        table.status,
        TableStatus::InvalidPaceConfig(PaceRangeIssue::NonPositiveInterval(0))
    );
    assert!(table.rows.is_empty());
    assert!(table.cells.is_empty());
}

#[test]
fn test_unknown_race() {
    let mut assembler = TableAssembler::new();
    let req = TableRequest {
        selection: DistanceSelection::race("ultra", 1000.0),
        ..request(TableMode::Intermediate)
    };
    assert_eq!(
        assembler.assemble(&req).status,
        TableStatus::UnknownRace("ultra".to_string())
    );
}

#[test]
fn test_no_distances() {
    let empty = DistanceCatalog::new(Vec::new()).unwrap();
    let mut assembler = TableAssembler::with_catalog(empty);
    assert_eq!(
        assembler.assemble(&request(TableMode::Official)).status,
        TableStatus::NoDistances
    );
}

#[test]
fn test_custom_catalog() {
    let catalog =
        DistanceCatalog::new(vec![DistanceEntry::new("mile", "Mile", 1609.344).with_bounds(98.0, 104.0)])
            .unwrap();
    let mut assembler = TableAssembler::with_catalog(catalog);
    let table = assembler.assemble(&request(TableMode::Official));

    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.columns[0].label, "Mile");
    assert_eq!(assembler.training().len(), 12);
}

#[test]
fn test_mode_switches_rebuild() {
    let mut assembler = TableAssembler::new();
    let official = assembler.assemble(&request(TableMode::Official)).clone();
    let interval = assembler.assemble(&request(TableMode::Interval)).clone();
    let again = assembler.assemble(&request(TableMode::Official)).clone();

    assert_ne!(official.columns, interval.columns);
    assert_eq!(official, again);
}

#[test]
fn test_repeated_request_is_identical() {
    let mut assembler = TableAssembler::new();
    let req = TableRequest {
        color_enabled: true,
        ..request(TableMode::Official)
    };
    let first = assembler.assemble(&req).clone();
    let second = assembler.assemble(&req).clone();
    let fresh = TableAssembler::new().assemble(&req).clone();

    assert_eq!(first, second);
    assert_eq!(first, fresh);
}

#[test]
fn test_caller_functions() {
    let official = list_distances(TableMode::Official, &DistanceSelection::default()).unwrap();
    assert_eq!(official.len(), DistanceCatalog::official().len());

    assert_eq!(
        list_distances(TableMode::Intermediate, &DistanceSelection::default()),
        Err(TableStatus::AwaitingSelection)
    );

    let splits =
        list_distances(TableMode::Intermediate, &DistanceSelection::race("3000m", 1000.0)).unwrap();
    let labels: Vec<&str> = splits.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["1km", "2km", "3000m"]);

    let paces = list_paces(&PaceRangeConfig::new(300, 240, 30));
    assert_eq!(paces.len(), 3);
    assert_eq!(paces[1].label, "4:30");
}

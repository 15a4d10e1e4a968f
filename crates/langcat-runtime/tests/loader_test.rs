use std::fs;
use std::time::{Duration, Instant};

use langcat_runtime::{CatalogLoader, Error, LoadEvent};
use tempfile::TempDir;

fn write_catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("data.json");
    let json = serde_json::json!([
        {"name": "Go", "description": "systems", "popularity": 10},
        {"name": "Rust", "description": "safe systems", "popularity": 20}
    ]);
    fs::write(&path, json.to_string()).unwrap();
    path
}

#[test]
fn test_spawned_load_reports_catalog_after_delay() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir);

    let started = Instant::now();
    let handle = CatalogLoader::new(path)
        .with_delay(Duration::from_millis(50))
        .spawn()
        .unwrap();

    match handle.wait() {
        LoadEvent::Loaded(catalog) => {
            assert_eq!(catalog.len(), 2);
            assert_eq!(catalog.items()[1].name, "Rust");
        }
        LoadEvent::Failed(err) => panic!("unexpected failure: {}", err),
    }
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_missing_file_fails_without_delay() {
    let dir = TempDir::new().unwrap();
    let handle = CatalogLoader::new(dir.path().join("missing.json"))
        .with_delay(Duration::from_secs(30))
        .spawn()
        .unwrap();

    let started = Instant::now();
    match handle.wait() {
        LoadEvent::Failed(Error::Catalog(langcat_types::Error::Io(_))) => {}
        other => panic!("expected IO failure, got {:?}", other),
    }
    assert!(started.elapsed() < Duration::from_secs(30));
}

#[test]
fn test_malformed_file_is_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "not json").unwrap();

    let err = CatalogLoader::new(path).load_blocking().unwrap_err();
    assert!(matches!(
        err,
        Error::Catalog(langcat_types::Error::Parse(_))
    ));
}

#[test]
fn test_try_recv_yields_outcome_once() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir);
    let mut handle = CatalogLoader::new(path).spawn().unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(event) = handle.try_recv() {
            break event;
        }
        assert!(Instant::now() < deadline, "loader never reported");
        std::thread::sleep(Duration::from_millis(5));
    };

    assert!(matches!(event, LoadEvent::Loaded(_)));
    assert!(handle.is_finished());
    assert!(handle.try_recv().is_none());
}

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use theme_tools::{ThemeError, VersionSynchronizer};

fn write_fixtures(dir: &TempDir, manifest_version: &str) -> (PathBuf, PathBuf) {
    let manifest_path = dir.path().join("package.json");
    let app_config_path = dir.path().join("tauri.conf.json");

    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&json!({
            "name": "demo-app",
            "private": true,
            "version": manifest_version,
            "scripts": { "dev": "vite", "build": "vite build" }
        }))
        .unwrap(),
    )
    .unwrap();

    fs::write(
        &app_config_path,
        serde_json::to_string_pretty(&json!({
            "productName": "demo-app",
            "identifier": "com.example.demo",
            "version": "0.9.9"
        }))
        .unwrap(),
    )
    .unwrap();

    (manifest_path, app_config_path)
}

fn read_json(path: &PathBuf) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_patch_increment() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, app_config_path) = write_fixtures(&dir, "1.2.3");

    let synchronizer = VersionSynchronizer::new(&manifest_path, &app_config_path);
    let next = synchronizer.run(None).unwrap();
    assert_eq!(next, "1.2.4");

    let manifest = read_json(&manifest_path);
    let app_config = read_json(&app_config_path);
    assert_eq!(manifest["version"], "1.2.4");
    assert_eq!(app_config["version"], "1.2.4");
}

#[test]
fn test_other_fields_preserved() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, app_config_path) = write_fixtures(&dir, "1.2.3");

    VersionSynchronizer::new(&manifest_path, &app_config_path)
        .run(None)
        .unwrap();

    let manifest = read_json(&manifest_path);
    let app_config = read_json(&app_config_path);
    assert_eq!(manifest["name"], "demo-app");
    assert_eq!(manifest["private"], true);
    assert_eq!(manifest["scripts"]["dev"], "vite");
    assert_eq!(manifest["scripts"]["build"], "vite build");
    assert_eq!(app_config["productName"], "demo-app");
    assert_eq!(app_config["identifier"], "com.example.demo");
}

#[test]
fn test_explicit_version_used_verbatim() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, app_config_path) = write_fixtures(&dir, "1.2.3");

    let next = VersionSynchronizer::new(&manifest_path, &app_config_path)
        .run(Some("2.0.0"))
        .unwrap();
    assert_eq!(next, "2.0.0");

    assert_eq!(read_json(&manifest_path)["version"], "2.0.0");
    assert_eq!(read_json(&app_config_path)["version"], "2.0.0");
}

#[test]
fn test_missing_file_is_file_error() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, _) = write_fixtures(&dir, "1.2.3");
    let missing = dir.path().join("does-not-exist.json");

    let result = VersionSynchronizer::new(&manifest_path, &missing).run(None);
    assert!(matches!(result, Err(ThemeError::FileError { .. })));

    // nothing was written
    assert_eq!(read_json(&manifest_path)["version"], "1.2.3");
}

#[test]
fn test_malformed_json_is_json_error() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, app_config_path) = write_fixtures(&dir, "1.2.3");
    fs::write(&app_config_path, "{ not json").unwrap();

    let result = VersionSynchronizer::new(&manifest_path, &app_config_path).run(None);
    assert!(matches!(result, Err(ThemeError::JsonError(_))));
}

#[test]
fn test_missing_version_field() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, app_config_path) = write_fixtures(&dir, "1.2.3");
    fs::write(&manifest_path, r#"{ "name": "demo-app" }"#).unwrap();

    let result = VersionSynchronizer::new(&manifest_path, &app_config_path).run(None);
    match result {
        Err(ThemeError::MissingFieldError { field, .. }) => assert_eq!(field, "version"),
        other => panic!("expected MissingFieldError, got {:?}", other),
    }
}

#[test]
fn test_malformed_current_version() {
    let dir = TempDir::new().unwrap();
    let (manifest_path, app_config_path) = write_fixtures(&dir, "not-a-version");

    let result = VersionSynchronizer::new(&manifest_path, &app_config_path).run(None);
    assert!(matches!(result, Err(ThemeError::VersionFormatError { .. })));

    // explicit version still works against the same manifest
    let next = VersionSynchronizer::new(&manifest_path, &app_config_path)
        .run(Some("3.1.0"))
        .unwrap();
    assert_eq!(next, "3.1.0");
}

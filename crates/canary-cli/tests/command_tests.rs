// Rust guideline compliant 2026-10-19

//! Integration tests for the resolve command.

use canary_app::ErrorCode;
use canary_cli::commands::resolve::{execute, load_stage, ResolveSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a catalog snapshot and returns its path.
fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("catalog.jsonl");
    let content = [
        r#"{"id":"c1","name":"latency","applications":["app1"]}"#,
        r#"{"id":"c2","name":"latency","applications":["app2"]}"#,
        r#"{"id":"c3","name":"errors","applications":["app2"]}"#,
        r#"{"id":"c4","name":"errors","applications":["app2"]}"#,
    ]
    .join("\n");
    fs::write(&path, content).expect("Failed to write catalog");
    path
}

fn flags(name: &str, application: &str) -> ResolveSource {
    ResolveSource::Flags {
        name: name.to_string(),
        application: application.to_string(),
    }
}

#[test]
fn test_resolve_from_flags() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = write_catalog(&temp_dir);

    assert_eq!(execute(&flags("latency", "app1"), &catalog).unwrap(), "c1");
    assert_eq!(execute(&flags("latency", "app2"), &catalog).unwrap(), "c2");
}

#[test]
fn test_resolve_from_stage_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = write_catalog(&temp_dir);
    let stage_path = temp_dir.path().join("stage.json");
    fs::write(
        &stage_path,
        r#"{"application":"app2","context":{"canaryConfigName":"latency","other":1}}"#,
    )
    .expect("Failed to write stage");

    let id = execute(&ResolveSource::Stage(stage_path), &catalog).unwrap();
    assert_eq!(id, "c2");
}

#[test]
fn test_resolve_reports_not_found_and_ambiguous() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = write_catalog(&temp_dir);

    let err = execute(&flags("errors", "app1"), &catalog).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);

    let err = execute(&flags("errors", "app2"), &catalog).unwrap_err();
    assert_eq!(err.code(), ErrorCode::AmbiguousConfig);
}

#[test]
fn test_resolve_missing_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let err = execute(&flags("latency", "app1"), &temp_dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
}

#[test]
fn test_load_stage_rejects_malformed_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let stage_path = temp_dir.path().join("stage.json");
    fs::write(&stage_path, "{not json").expect("Failed to write stage");

    let err = load_stage(&ResolveSource::Stage(stage_path)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::JsonError);
}

#[test]
fn test_load_stage_from_flags() {
    let stage = load_stage(&flags("latency", "app1")).unwrap();

    assert_eq!(stage.application, "app1");
    assert_eq!(
        stage.map_to_string("/canaryConfigName").unwrap(),
        Some("latency".to_string())
    );
}

// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.

use canary_core::Error;

#[test]
fn test_not_found_error_formatting() {
    let error = Error::NotFound {
        config_name: Some("latency".to_string()),
        application: "checkout".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Couldn't find a canary configId for configName latency and application checkout"
    );
}

#[test]
fn test_ambiguous_error_formatting() {
    let error = Error::Ambiguous {
        config_name: Some("latency".to_string()),
        application: "checkout".to_string(),
        matches: vec!["c1".to_string(), "c2".to_string()],
    };
    assert_eq!(
        error.to_string(),
        "Found more than one canary configId for configName latency and application checkout"
    );
}

#[test]
fn test_absent_name_renders_as_null() {
    let error = Error::Ambiguous {
        config_name: None,
        application: "checkout".to_string(),
        matches: Vec::new(),
    };
    assert!(error.to_string().contains("configName null"));
}

#[test]
fn test_invalid_catalog_error_formatting() {
    let error = Error::InvalidCatalog {
        line: 3,
        message: "expected value".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid catalog at line 3: expected value");
}

#[test]
fn test_invalid_config_error_formatting() {
    let error = Error::InvalidConfig("log_level must be one of error".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid config: log_level must be one of error"
    );
}

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::from(io_err);
    assert!(error.to_string().contains("IO error"));
}

#[test]
fn test_user_error_classification() {
    let not_found = Error::NotFound {
        config_name: None,
        application: "app1".to_string(),
    };
    let ambiguous = Error::Ambiguous {
        config_name: None,
        application: "app1".to_string(),
        matches: Vec::new(),
    };
    let invalid = Error::InvalidConfig("bad".to_string());

    assert!(not_found.is_user_error());
    assert!(ambiguous.is_user_error());
    assert!(!invalid.is_user_error());
}

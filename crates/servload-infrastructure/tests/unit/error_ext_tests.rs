//! Error extension tests

use servload_domain::error::Error;
use servload_infrastructure::error_ext::ErrorContext;
use std::io;
use std::path::Path;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_with_context_maps_to_scan_error() {
    let err = io_failure().with_context(|| "Listing modules").unwrap_err();
    match err {
        Error::Scan { message, source } => {
            assert_eq!(message, "Listing modules: denied");
            assert!(source.is_some());
        }
        other => panic!("Expected Scan, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    assert!(
        Ok::<_, io::Error>(1)
            .with_context(|| -> String { panic!("context built on success") })
            .is_ok()
    );
    let err = io_failure()
        .with_context(|| format!("Reading {}", "pkg"))
        .unwrap_err();
    assert!(err.to_string().contains("Reading pkg: denied"));
}

#[test]
fn test_io_and_config_context() {
    assert!(matches!(
        io_failure().io_context("Writing file").unwrap_err(),
        Error::Io { .. }
    ));
    assert!(matches!(
        io_failure().config_context("Loading config").unwrap_err(),
        Error::Configuration { .. }
    ));
}

#[test]
fn test_module_context_records_path() {
    let err = serde_json::from_str::<serde_json::Value>("{")
        .module_context("/pkg/provider.json", "invalid JSON")
        .unwrap_err();
    match err {
        Error::ModuleParse { path, message, .. } => {
            assert_eq!(path, Path::new("/pkg/provider.json"));
            assert!(message.starts_with("invalid JSON: "));
        }
        other => panic!("Expected ModuleParse, got {other:?}"),
    }
}

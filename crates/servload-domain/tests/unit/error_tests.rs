//! Error type tests

use servload_domain::error::Error;
use std::error::Error as _;
use std::path::Path;

#[test]
fn test_module_not_found_display() {
    let err = Error::module_not_found("/app/missing.json");
    assert_eq!(err.to_string(), "Module not found: /app/missing.json");

    let err = Error::module_not_found_with_detail("/app/x.json", "no constructor named 'x'");
    assert_eq!(
        err.to_string(),
        "Module not found: /app/x.json (no constructor named 'x')"
    );
}

#[test]
fn test_invalid_argument_display() {
    let err = Error::invalid_argument("packageName must be specified");
    assert_eq!(err.to_string(), "Invalid argument: packageName must be specified");
}

#[test]
fn test_provider_load_failures() {
    assert!(Error::module_not_found("/a").is_provider_load_failure());
    assert!(Error::module_parse("/a", "bad").is_provider_load_failure());
    assert!(Error::provider_construction("/a", "panicked").is_provider_load_failure());
    assert!(!Error::invalid_argument("x").is_provider_load_failure());
    assert!(!Error::io_with_source("x", std::io::Error::other("y")).is_provider_load_failure());
}

#[test]
fn test_sources_are_preserved() {
    let io = std::io::Error::other("disk on fire");
    let err = Error::module_parse_with_source("/app/a.json", "cannot read module", io);
    assert!(err.source().is_some());
    match &err {
        Error::ModuleParse { path, .. } => assert_eq!(path, Path::new("/app/a.json")),
        other => panic!("Expected ModuleParse, got {other:?}"),
    }

    assert!(Error::configuration("x").source().is_none());
}

#[test]
fn test_context_errors_carry_their_source() {
    let err =
        Error::scan_with_source("Failed to read /app/node_modules", std::io::Error::other("x"));
    assert_eq!(err.to_string(), "Package scan error: Failed to read /app/node_modules");
    assert!(err.source().is_some());

    let io = std::io::Error::other("x");
    let err = Error::io_with_source("Failed to determine current directory", io);
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.source().is_some());
}

//! Figment configuration tests
//!
//! Environment override tests modify process environment variables and
//! must run sequentially:
//!
//! ```bash
//! cargo test -p servload-infrastructure --test unit config_figment -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.

use servload_infrastructure::config::{AppConfig, ConfigLoader};
use servload_infrastructure::constants::{DEFAULT_MANIFEST_FILE, DEFAULT_MODULES_DIR};
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.scan.manifest_file, DEFAULT_MANIFEST_FILE);
    assert_eq!(config.scan.modules_dir, DEFAULT_MODULES_DIR);
    assert!(config.scan.anchor.is_none());
    assert_eq!(config.caller_identification.limit, 1);
    assert!(config.caller_identification.exclusions.is_empty());
}

#[test]
fn test_explicit_file_is_recorded() {
    let loader = ConfigLoader::new().with_config_path("/etc/servload/servload.toml");
    assert_eq!(
        loader.config_path(),
        Some(std::path::Path::new("/etc/servload/servload.toml"))
    );
}

#[test]
fn test_empty_modules_dir_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("servload.toml");
    std::fs::write(&path, "[scan]\nmodules_dir = \"  \"\n").unwrap();

    let result = ConfigLoader::new()
        .with_env_prefix("SERVLOAD_FIGMENT_UNSET")
        .with_config_path(&path)
        .load();
    assert!(result.is_err());
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("servload.toml");
    std::fs::write(&path, "[scan]\nmodules_dir = \"vendor\"\n").unwrap();

    set_env("SERVLOAD__SCAN__MODULES_DIR", "deps");
    set_env("SERVLOAD__SCAN__ANCHOR", "/srv/app");
    set_env("SERVLOAD__LOGGING__LEVEL", "trace");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("SERVLOAD__SCAN__MODULES_DIR");
    remove_env("SERVLOAD__SCAN__ANCHOR");
    remove_env("SERVLOAD__LOGGING__LEVEL");

    let config = config.expect("Should load config");
    assert_eq!(config.scan.modules_dir, "deps");
    assert_eq!(config.scan.anchor, Some(PathBuf::from("/srv/app")));
    assert_eq!(config.logging.level, "trace");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_not_loaded() {
    set_env("SERVLOAD_SCAN__MODULES_DIR", "ignored");
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/servload.toml")
        .load();
    remove_env("SERVLOAD_SCAN__MODULES_DIR");

    assert_eq!(config.unwrap().scan.modules_dir, DEFAULT_MODULES_DIR);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_invalid_env_level_fails_fast() {
    set_env("SERVLOAD__LOGGING__LEVEL", "chatty");
    let result = ConfigLoader::new()
        .with_config_path("/nonexistent/servload.toml")
        .load();
    remove_env("SERVLOAD__LOGGING__LEVEL");

    assert!(result.is_err());
}

//! End-to-end loading over a package tree on disk

use crate::test_utils::PackageTree;
use serde_json::{Value, json};
use servload_application::ServiceLoader;
use servload_application::registry::{PROVIDER_CONSTRUCTORS, ProviderConstructorEntry};
use servload_domain::ProviderInstance;
use servload_domain::error::Error;
use servload_infrastructure::bootstrap::{anchor_package_name, build_environment};
use servload_infrastructure::{AppConfig, CallerContext};

#[derive(Debug)]
struct JsonFormatter;

#[linkme::distributed_slice(PROVIDER_CONSTRUCTORS)]
static JSON_FORMATTER: ProviderConstructorEntry = ProviderConstructorEntry {
    name: "bootstrap-test-json-formatter",
    description: "Formatter used by bootstrap tests",
    construct: || Ok(ProviderInstance::new(JsonFormatter)),
};

/// log-core is installed under app; app and a plugin both provide
/// formatters for it.
fn project() -> PackageTree {
    let tree = PackageTree::new();
    tree.package(
        "",
        json!({
            "name": "app",
            "services": { "log-core": { "formatter": "./formatters/plain.json" } }
        }),
    );
    tree.file("formatters/plain.json", r#"{ "style": "plain" }"#);
    tree.package("node_modules/log-core", json!({ "name": "log-core" }));
    tree.package(
        "node_modules/log-json",
        json!({
            "name": "log-json",
            "services": { "log-core": {
                "formatter": { "path": "./formatter.json" },
                "sink": "./missing.json"
            } }
        }),
    );
    tree.file(
        "node_modules/log-json/formatter.json",
        r#"{ "constructor": "bootstrap-test-json-formatter" }"#,
    );
    tree
}

fn config_anchored_at(tree: &PackageTree, relative: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.scan.anchor = Some(tree.path(relative));
    config
}

#[test]
fn test_loads_providers_from_disk() {
    let tree = project();
    let env = build_environment(&config_anchored_at(&tree, "node_modules/log-core")).unwrap();

    let loader = ServiceLoader::new(env, "formatter", "log-core").unwrap();
    let providers: Vec<_> = loader.iter().unwrap().collect();

    assert_eq!(providers.len(), 2);
    assert_eq!(
        providers[0].downcast_ref::<Value>(),
        Some(&json!({ "style": "plain" }))
    );
    assert!(providers[1].is::<JsonFormatter>());

    let paths: Vec<_> = loader.providers().unwrap().paths().map(|p| p.to_path_buf()).collect();
    assert_eq!(
        paths,
        vec![
            tree.path("formatters/plain.json"),
            tree.path("node_modules/log-json/formatter.json"),
        ]
    );
}

#[test]
fn test_reload_reconstructs_only_constructor_exports() {
    let tree = project();
    let env = build_environment(&config_anchored_at(&tree, "node_modules/log-core")).unwrap();
    let loader = ServiceLoader::new(env, "formatter", "log-core").unwrap();

    let before: Vec<_> = loader.iter().unwrap().collect();
    loader.reload();
    let after: Vec<_> = loader.iter().unwrap().collect();

    assert!(before[0].ptr_eq(&after[0]));
    assert!(!before[1].ptr_eq(&after[1]));
}

#[test]
fn test_missing_provider_file_fails_iteration() {
    let tree = project();
    let env = build_environment(&config_anchored_at(&tree, "")).unwrap();
    let loader = ServiceLoader::new(env, "sink", "log-core").unwrap();

    assert!(matches!(
        loader.iter().unwrap_err(),
        Error::ModuleNotFound { .. }
    ));
    assert!(!loader.is_resolved());

    tree.file("node_modules/log-json/missing.json", "{}");
    assert_eq!(loader.iter().unwrap().count(), 1);
}

#[test]
fn test_package_inferred_from_caller_frame() {
    let tree = project();
    let env = build_environment(&config_anchored_at(&tree, "")).unwrap();

    assert!(ServiceLoader::new(env.clone(), "formatter", ()).is_err());

    let _frame = CallerContext::enter("log_core::init", "log-core");
    let loader = ServiceLoader::new(env, "formatter", ()).unwrap();
    assert_eq!(loader.package_name(), "log-core");
    assert_eq!(loader.iter().unwrap().count(), 2);
}

#[test]
fn test_anchor_package_name() {
    let tree = project();
    let env = build_environment(&config_anchored_at(&tree, "node_modules/log-json")).unwrap();
    assert_eq!(anchor_package_name(&env).unwrap().as_deref(), Some("log-json"));

    let empty = PackageTree::new();
    let mut config = config_anchored_at(&empty, "");
    config.scan.manifest_file = "servload-fixture-manifest.json".to_string();
    let env = build_environment(&config).unwrap();
    assert_eq!(anchor_package_name(&env).unwrap(), None);
}

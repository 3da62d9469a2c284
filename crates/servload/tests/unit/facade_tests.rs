//! Facade entry point tests
//!
//! The default environment is process-wide, so every test installs the same
//! in-memory environment through `setup`.

use serde_json::json;
use servload::application::InMemoryModuleHost;
use servload::domain::{PackageDescriptor, ServicesSection, StaticPackageGraph};
use servload::infrastructure::AppConfig;
use servload::{Error, LoaderEnvironment, LoaderOptions, service_loader};
use std::sync::{Arc, Once};

static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        let host = InMemoryModuleHost::new();
        host.register_value("/app/formatters/plain.json", "plain");
        host.register_value("/app/formatters/own.json", "own");

        let services = ServicesSection::from_manifest(&json!({
            "services": {
                "log-core": { "formatter": "./formatters/plain.json" },
                "servload": { "formatter": "./formatters/own.json" }
            }
        }))
        .unwrap();
        let graph = StaticPackageGraph::new(vec![
            PackageDescriptor::new("app", "/app").with_services(services),
        ]);

        servload::init(LoaderEnvironment::new(Arc::new(graph), Arc::new(host), "/app")).unwrap();
    });
}

fn names(loader: &servload::ServiceLoader) -> Vec<&'static str> {
    loader
        .iter()
        .unwrap()
        .map(|provider| *provider.downcast_ref::<&'static str>().unwrap())
        .collect()
}

#[test]
fn test_version() {
    assert_eq!(servload::version(), env!("CARGO_PKG_VERSION"));
    assert!(!servload::version().is_empty());
}

#[test]
fn test_load_with_explicit_package() {
    setup();
    let loader = servload::load("formatter", "log-core").unwrap();
    assert_eq!(loader.to_string(), "ServiceLoader[formatter]");
    assert_eq!(names(&loader), vec!["plain"]);
}

#[test]
fn test_macro_binds_calling_package() {
    setup();
    let loader = service_loader!("formatter").unwrap();
    assert_eq!(loader.package_name(), "servload");
    assert_eq!(names(&loader), vec!["own"]);

    let loader = service_loader!("formatter", LoaderOptions::new()).unwrap();
    assert_eq!(loader.package_name(), "servload");
}

#[test]
fn test_load_without_package_fails() {
    setup();
    let err = servload::load("formatter", ()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_init_only_once() {
    setup();
    let env = servload::environment().unwrap();
    assert!(matches!(
        servload::init(env),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        servload::init_with_config(&AppConfig::default()),
        Err(Error::Configuration { .. })
    ));
}

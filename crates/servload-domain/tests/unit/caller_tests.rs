//! Caller identification tests

use servload_domain::constants::LOADER_MODULE_NAME;
use servload_domain::{
    CallerIdentificationOptions, CallerIdentifier, FixedCaller, LoaderOptions, NoCaller,
};
use std::sync::Arc;

#[test]
fn test_no_caller() {
    assert!(NoCaller.identify(&CallerIdentificationOptions::default()).is_empty());
}

#[test]
fn test_fixed_caller_respects_exclusions_and_limit() {
    let caller = FixedCaller::new("app::main", "app");
    let found = caller.identify(&CallerIdentificationOptions::default());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].package_name.as_deref(), Some("app"));

    let excluded = CallerIdentificationOptions::default().with_exclusion("app::main");
    assert!(caller.identify(&excluded).is_empty());

    let none = CallerIdentificationOptions {
        exclusions: Vec::new(),
        limit: 0,
    };
    assert!(caller.identify(&none).is_empty());
}

#[test]
fn test_identifier_through_arc() {
    let caller: Arc<dyn CallerIdentifier> = Arc::new(FixedCaller::anonymous("script"));
    let found = caller.identify(&CallerIdentificationOptions::default());
    assert_eq!(found[0].module, "script");
    assert!(found[0].package_name.is_none());
}

#[test]
fn test_normalization_excludes_loader_and_forces_limit() {
    let options = CallerIdentificationOptions {
        exclusions: vec!["shim".to_string(), LOADER_MODULE_NAME.to_string(), "shim".to_string()],
        limit: 5,
    }
    .normalized();

    assert_eq!(options.limit, 1);
    assert_eq!(options.exclusions, vec![LOADER_MODULE_NAME, "shim"]);
    assert_eq!(options.normalized(), options);
}

#[test]
fn test_loader_options_deserialize_from_camel_case() {
    let options: LoaderOptions = serde_json::from_value(serde_json::json!({
        "callerIdentification": { "exclusions": ["wrapper"], "limit": 3 },
        "unknown": true
    }))
    .unwrap();

    assert!(options.caller_identification.excludes("wrapper"));
    assert_eq!(options.normalized().caller_identification.limit, 1);
}

//! Manifest services section tests

use serde_json::json;
use servload_domain::{ServiceDeclaration, ServicesSection, normalize_path};
use std::path::{Path, PathBuf};

#[test]
fn test_iter_preserves_manifest_order() {
    let section = ServicesSection::from_manifest(&json!({
        "services": {
            "zeta": { "b": "./b.json", "a": { "path": "./a.json" } },
            "alpha": { "c": "./c.json", "bad": "" },
            "skipped": "not an object"
        }
    }))
    .unwrap();

    let triples: Vec<_> = section
        .iter()
        .map(|(owner, service, declaration)| (owner, service, declaration.path().to_string()))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("zeta", "b", "./b.json".to_string()),
            ("zeta", "a", "./a.json".to_string()),
            ("alpha", "c", "./c.json".to_string()),
        ]
    );
    assert_eq!(section.owners().collect::<Vec<_>>(), vec!["zeta", "alpha", "skipped"]);
}

#[test]
fn test_declaration_shapes() {
    assert!(ServiceDeclaration::from_value(&json!("./x.json")).is_some());
    assert!(ServiceDeclaration::from_value(&json!({ "path": "./x.json", "extra": 1 })).is_some());
    assert!(ServiceDeclaration::from_value(&json!({ "path": "" })).is_none());
    assert!(ServiceDeclaration::from_value(&json!({ "path": 3 })).is_none());
    assert!(ServiceDeclaration::from_value(&json!(null)).is_none());
}

#[test]
fn test_resolution_is_lexical() {
    let declaration = ServiceDeclaration::new("../shared/./impl.json").unwrap();
    assert_eq!(
        declaration.resolve(Path::new("/repo/node_modules/a")),
        PathBuf::from("/repo/node_modules/shared/impl.json")
    );
    assert_eq!(normalize_path(Path::new("/../a/b/..")), PathBuf::from("/a"));
}

//! Service declarations and the manifest `services` section
//!
//! A manifest's `services` field maps an owning package name to a mapping of
//! service name to declaration. Declarations are parsed leniently: anything
//! that is not a non-empty path string, or a record with one, is treated as
//! "no declaration here" instead of an error.

use crate::constants::{DECLARATION_PATH_FIELD, MANIFEST_SERVICES_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};

/// One provider declared for one service inside a manifest section
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceDeclaration {
    path: String,
}

impl ServiceDeclaration {
    /// Create a declaration for a relative provider path
    ///
    /// Returns `None` for an empty path.
    pub fn new<S: Into<String>>(path: S) -> Option<Self> {
        let path = path.into();
        if path.is_empty() {
            None
        } else {
            Some(Self { path })
        }
    }

    /// Normalize a raw manifest value into a declaration
    ///
    /// Accepts a bare string or a record with a string `path` field.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(path) => Self::new(path.as_str()),
            Value::Object(record) => record
                .get(DECLARATION_PATH_FIELD)
                .and_then(Value::as_str)
                .and_then(Self::new),
            _ => None,
        }
    }

    /// The declared path, as written in the manifest
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve the declared path against a package install directory
    pub fn resolve(&self, package_dir: &Path) -> PathBuf {
        normalize_path(&package_dir.join(&self.path))
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. Never touches the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// The `services` section of a package manifest
///
/// Keeps the raw JSON so that declaration order is the manifest order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServicesSection {
    owners: Map<String, Value>,
}

impl ServicesSection {
    /// Build a section from an owning-package mapping
    pub fn new(owners: Map<String, Value>) -> Self {
        Self { owners }
    }

    /// Extract the section from a whole manifest document
    ///
    /// Returns `None` when the field is missing or not an object.
    pub fn from_manifest(manifest: &Value) -> Option<Self> {
        match manifest.get(MANIFEST_SERVICES_FIELD) {
            Some(Value::Object(owners)) => Some(Self::new(owners.clone())),
            _ => None,
        }
    }

    /// Owning package names in manifest order
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }

    /// Service mapping declared for an owning package, if it is an object
    pub fn services_for(&self, owner: &str) -> Option<&Map<String, Value>> {
        self.owners.get(owner).and_then(Value::as_object)
    }

    /// Valid declarations for `service` under `owner`, in manifest order
    pub fn declarations_for<'a>(
        &'a self,
        owner: &str,
        service: &'a str,
    ) -> impl Iterator<Item = ServiceDeclaration> + 'a {
        self.services_for(owner)
            .into_iter()
            .flat_map(|services| services.iter())
            .filter(move |(name, _)| name.as_str() == service)
            .filter_map(|(_, value)| ServiceDeclaration::from_value(value))
    }

    /// Every valid `(owner, service, declaration)` triple in manifest order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, ServiceDeclaration)> {
        self.owners
            .iter()
            .filter_map(|(owner, services)| Some((owner.as_str(), services.as_object()?)))
            .flat_map(|(owner, services)| {
                services.iter().filter_map(move |(service, value)| {
                    ServiceDeclaration::from_value(value)
                        .map(|declaration| (owner, service.as_str(), declaration))
                })
            })
    }

    /// Whether the section declares nothing at all
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

//! Package descriptors produced by a package graph scan

use crate::constants::MANIFEST_NAME_FIELD;
use crate::value_objects::declaration::ServicesSection;
use crate::value_objects::options::CallerIdentificationOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// One installed package as reported by a scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name
    pub name: String,
    /// Absolute install directory
    pub directory: PathBuf,
    /// Services declared in the package manifest, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesSection>,
}

impl PackageDescriptor {
    /// Create a descriptor without services
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, directory: P) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            services: None,
        }
    }

    /// Attach a services section
    pub fn with_services(mut self, services: ServicesSection) -> Self {
        self.services = Some(services);
        self
    }

    /// Build a descriptor from a parsed manifest document
    ///
    /// The package name falls back to the directory name when the manifest
    /// carries no string `name`.
    pub fn from_manifest<P: AsRef<Path>>(directory: P, manifest: &Value) -> Self {
        let directory = directory.as_ref().to_path_buf();
        let name = manifest
            .get(MANIFEST_NAME_FIELD)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map_or_else(|| directory_name(&directory), str::to_string);

        Self {
            name,
            services: ServicesSection::from_manifest(manifest),
            directory,
        }
    }
}

fn directory_name(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Input to a package graph scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Include packages enclosing the anchor package
    pub include_ancestors: bool,
    /// Caller identification options forwarded by the loader
    pub caller_identification: CallerIdentificationOptions,
    /// Location the scan is rooted at
    pub anchor: PathBuf,
}

impl ScanRequest {
    /// Create a request rooted at `anchor` that includes ancestors
    pub fn new<P: Into<PathBuf>>(anchor: P) -> Self {
        Self {
            include_ancestors: true,
            caller_identification: CallerIdentificationOptions::default(),
            anchor: anchor.into(),
        }
    }

    /// Set whether ancestors are included
    pub fn with_ancestors(mut self, include_ancestors: bool) -> Self {
        self.include_ancestors = include_ancestors;
        self
    }

    /// Set the forwarded caller identification options
    pub fn with_caller_identification(mut self, options: CallerIdentificationOptions) -> Self {
        self.caller_identification = options;
        self
    }
}

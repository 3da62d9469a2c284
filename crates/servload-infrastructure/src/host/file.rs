//! File-backed module host
//!
//! Provider modules are small JSON or TOML documents:
//!
//! ```json
//! { "constructor": "json-formatter" }
//! { "factory": "shared-pool" }
//! { "level": "info", "targets": ["stderr"] }
//! ```
//!
//! The first names a registered constructor and is class-shaped. The second
//! names a registered factory whose result is exported as a value. Anything
//! else is exported as the parsed document itself.

use crate::constants::{MODULE_CONSTRUCTOR_FIELD, MODULE_FACTORY_FIELD};
use crate::error_ext::ErrorContext;
use dashmap::DashMap;
use serde_json::Value;
use servload_application::registry::{
    find_constructor, find_factory, list_constructors, list_factories,
};
use servload_domain::error::{Error, Result};
use servload_domain::{ModuleExport, ModuleHost, ProviderInstance, normalize_path};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Module host reading provider module documents from disk
///
/// Loaded exports are cached by absolute path until evicted.
#[derive(Debug, Default)]
pub struct FileModuleHost {
    cache: DashMap<PathBuf, ModuleExport>,
}

impl FileModuleHost {
    /// Create a host with an empty module cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of modules currently cached
    pub fn cached_modules(&self) -> usize {
        self.cache.len()
    }

    fn load(path: &Path) -> Result<ModuleExport> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::module_not_found(path));
            }
            Err(err) => return Err(err).module_context(path, "cannot read module"),
        };

        let document = parse_document(path, &content)?;
        let export = export_document(path, document)?;
        debug!(module = %path.display(), constructor = export.is_constructor(), "Module loaded");
        Ok(export)
    }
}

impl ModuleHost for FileModuleHost {
    fn require(&self, path: &Path) -> Result<ModuleExport> {
        let path = normalize_path(path);
        if let Some(cached) = self.cache.get(&path) {
            trace!(module = %path.display(), "Module cache hit");
            return Ok(cached.value().clone());
        }

        let export = Self::load(&path)?;
        // A concurrent load of the same path may have landed first; keep it.
        Ok(self.cache.entry(path).or_insert(export).value().clone())
    }

    fn evict(&self, path: &Path) -> bool {
        self.cache.remove(&normalize_path(path)).is_some()
    }

    fn clear(&self) {
        self.cache.clear();
    }
}

fn parse_document(path: &Path, content: &str) -> Result<Value> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(content).module_context(path, "invalid JSON"),
        Some("toml") => toml::from_str(content).module_context(path, "invalid TOML"),
        other => Err(Error::module_parse(
            path,
            format!(
                "unsupported module format {}",
                other.map_or_else(|| "(none)".to_string(), |ext| format!(".{ext}"))
            ),
        )),
    }
}

fn export_document(path: &Path, document: Value) -> Result<ModuleExport> {
    if let Some(name) = document.get(MODULE_CONSTRUCTOR_FIELD).and_then(Value::as_str) {
        let constructor = find_constructor(name).ok_or_else(|| {
            Error::module_not_found_with_detail(
                path,
                unknown_name("constructor", name, list_constructors()),
            )
        })?;
        return Ok(ModuleExport::Constructor(Arc::new(constructor)));
    }

    if let Some(name) = document.get(MODULE_FACTORY_FIELD).and_then(Value::as_str) {
        let entry = find_factory(name).ok_or_else(|| {
            Error::module_not_found_with_detail(
                path,
                unknown_name("factory", name, list_factories()),
            )
        })?;
        return (entry.factory)().map(ModuleExport::Value);
    }

    Ok(ModuleExport::Value(ProviderInstance::new(document)))
}

fn unknown_name(kind: &str, name: &str, registered: Vec<(&'static str, &'static str)>) -> String {
    let names: Vec<_> = registered.into_iter().map(|(name, _)| name).collect();
    if names.is_empty() {
        format!("no {kind} named '{name}' is registered")
    } else {
        format!(
            "no {kind} named '{name}' is registered; available: {}",
            names.join(", ")
        )
    }
}

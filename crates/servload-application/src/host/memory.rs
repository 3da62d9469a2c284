//! In-memory module host
//!
//! Provider modules registered programmatically under absolute paths. A
//! registered module is evaluated on its first `require` and the export is
//! cached until evicted, mirroring how a file-backed host caches loaded
//! modules.

use dashmap::DashMap;
use servload_domain::error::{Error, Result};
use servload_domain::{ModuleExport, ModuleHost, ProviderConstructor, normalize_path};
use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

type ModuleSource = Arc<dyn Fn() -> Result<ModuleExport> + Send + Sync>;

/// Module host backed by registered module sources
#[derive(Default)]
pub struct InMemoryModuleHost {
    sources: DashMap<PathBuf, ModuleSource>,
    cache: DashMap<PathBuf, ModuleExport>,
    evaluations: DashMap<PathBuf, usize>,
}

impl InMemoryModuleHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module evaluated by `source` on first load
    pub fn register_module<P, F>(&self, path: P, source: F)
    where
        P: AsRef<Path>,
        F: Fn() -> Result<ModuleExport> + Send + Sync + 'static,
    {
        let path = normalize_path(path.as_ref());
        self.cache.remove(&path);
        self.sources.insert(path, Arc::new(source));
    }

    /// Register a module exporting a plain value
    ///
    /// The value is shared: every load hands out the same object.
    pub fn register_value<P, T>(&self, path: P, value: T)
    where
        P: AsRef<Path>,
        T: Any + Send + Sync,
    {
        let export = ModuleExport::value(value);
        self.register_module(path, move || Ok(export.clone()));
    }

    /// Register a module exporting a zero-argument constructor
    pub fn register_constructor<P, C>(&self, path: P, constructor: C)
    where
        P: AsRef<Path>,
        C: ProviderConstructor + 'static,
    {
        let export = ModuleExport::constructor(constructor);
        self.register_module(path, move || Ok(export.clone()));
    }

    /// How many times the module at `path` has been evaluated
    pub fn evaluations(&self, path: &Path) -> usize {
        self.evaluations
            .get(&normalize_path(path))
            .map_or(0, |count| *count)
    }

    /// Number of modules currently cached
    pub fn cached_modules(&self) -> usize {
        self.cache.len()
    }
}

impl ModuleHost for InMemoryModuleHost {
    fn require(&self, path: &Path) -> Result<ModuleExport> {
        let path = normalize_path(path);
        if let Some(export) = self.cache.get(&path) {
            return Ok(export.value().clone());
        }

        let source = self
            .sources
            .get(&path)
            .map(|source| Arc::clone(source.value()))
            .ok_or_else(|| Error::module_not_found(&path))?;

        let export = source()?;
        *self.evaluations.entry(path.clone()).or_insert(0) += 1;
        trace!(path = %path.display(), "Evaluated in-memory module");

        // A concurrent load may have published first; keep that export.
        Ok(self.cache.entry(path).or_insert(export).value().clone())
    }

    fn evict(&self, path: &Path) -> bool {
        self.cache.remove(&normalize_path(path)).is_some()
    }

    fn clear(&self) {
        self.cache.clear();
    }
}

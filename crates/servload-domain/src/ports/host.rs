//! Module Host Port
//!
//! Loads provider modules by absolute path. A host owns its own module
//! cache keyed by path: requiring the same path twice yields the same
//! export. That cache is separate from a loader's resolution cache and is
//! invalidated independently.

use crate::error::Result;
use crate::value_objects::{ModuleExport, ProviderInstance};
use std::path::Path;

/// A provider type constructible with zero arguments
pub trait ProviderConstructor: Send + Sync {
    /// Build a new instance
    fn construct(&self) -> Result<ProviderInstance>;

    /// Name of the constructed type, for diagnostics
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> ProviderConstructor for F
where
    F: Fn() -> Result<ProviderInstance> + Send + Sync,
{
    fn construct(&self) -> Result<ProviderInstance> {
        self()
    }
}

/// Loads provider modules
pub trait ModuleHost: Send + Sync {
    /// Load (or return the cached) export of the module at `path`
    fn require(&self, path: &Path) -> Result<ModuleExport>;

    /// Drop the cached export for `path`; returns whether one was cached
    fn evict(&self, path: &Path) -> bool;

    /// Drop every cached export
    fn clear(&self);
}

impl<H: ModuleHost + ?Sized> ModuleHost for std::sync::Arc<H> {
    fn require(&self, path: &Path) -> Result<ModuleExport> {
        (**self).require(path)
    }

    fn evict(&self, path: &Path) -> bool {
        (**self).evict(path)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

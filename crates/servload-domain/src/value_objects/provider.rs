//! Provider values, module exports and resolved provider sets

use crate::ports::host::ProviderConstructor;
use std::any::{Any, type_name};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A loaded provider
///
/// Opaque shared value; consumers recover the concrete type with
/// [`ProviderInstance::downcast`]. Cloning shares the same object.
#[derive(Clone)]
pub struct ProviderInstance {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderInstance {
    /// Wrap a value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Shared handle to the concrete value, if it has type `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Borrow the concrete value, if it has type `T`
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Whether the value has type `T`
    pub fn is<T: Any + Send + Sync>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Whether both handles point at the same object
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
    }

    /// Name of the concrete type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ProviderInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderInstance")
            .field(&self.type_name)
            .finish()
    }
}

/// What a module host loads from a provider path
#[derive(Clone)]
pub enum ModuleExport {
    /// Constructible with zero arguments; instantiated on every resolution
    Constructor(Arc<dyn ProviderConstructor>),
    /// Ready-to-use value, handed out as-is
    Value(ProviderInstance),
}

impl ModuleExport {
    /// Export a constructor
    pub fn constructor<C: ProviderConstructor + 'static>(constructor: C) -> Self {
        Self::Constructor(Arc::new(constructor))
    }

    /// Export a plain value
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Self::Value(ProviderInstance::new(value))
    }

    /// Whether the export is class-shaped
    pub fn is_constructor(&self) -> bool {
        matches!(self, Self::Constructor(_))
    }
}

impl fmt::Debug for ModuleExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(constructor) => f
                .debug_tuple("Constructor")
                .field(&constructor.type_name())
                .finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// A resolved provider keyed by its absolute module path
#[derive(Debug, Clone)]
pub struct ProviderEntry {
    /// Absolute, normalized provider path
    pub path: PathBuf,
    /// Loaded provider
    pub provider: ProviderInstance,
}

/// Ordered mapping from resolved provider path to provider
///
/// Insertion order is discovery order; a path is only ever inserted once.
#[derive(Debug, Clone, Default)]
pub struct ProviderSet {
    entries: Vec<ProviderEntry>,
    paths: HashSet<PathBuf>,
}

impl ProviderSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a provider was already recorded for `path`
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Insert a provider; the first insertion for a path wins
    ///
    /// Returns `false` when the path was already present.
    pub fn insert(&mut self, path: PathBuf, provider: ProviderInstance) -> bool {
        if !self.paths.insert(path.clone()) {
            return false;
        }
        self.entries.push(ProviderEntry { path, provider });
        true
    }

    /// Provider recorded for `path`
    pub fn get(&self, path: &Path) -> Option<&ProviderInstance> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.provider)
    }

    /// Number of providers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no provider was resolved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Providers in discovery order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ProviderInstance> {
        self.entries.iter().map(|entry| &entry.provider)
    }

    /// Entries in discovery order
    pub fn entries(&self) -> &[ProviderEntry] {
        &self.entries
    }

    /// Provider paths in discovery order
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }
}

impl<'a> IntoIterator for &'a ProviderSet {
    type Item = &'a ProviderInstance;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, ProviderEntry>,
        fn(&'a ProviderEntry) -> &'a ProviderInstance,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(provider_of as fn(&'a ProviderEntry) -> &'a ProviderInstance)
    }
}

fn provider_of(entry: &ProviderEntry) -> &ProviderInstance {
    &entry.provider
}

/// Iterator over a published provider set
///
/// Owns its set, so it stays valid after the loader is reloaded.
#[derive(Debug, Clone)]
pub struct ProviderIter {
    set: Arc<ProviderSet>,
    position: usize,
}

impl ProviderIter {
    /// Iterate over `set` from the start
    pub fn new(set: Arc<ProviderSet>) -> Self {
        Self { set, position: 0 }
    }
}

impl Iterator for ProviderIter {
    type Item = ProviderInstance;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.set.entries.get(self.position)?;
        self.position += 1;
        Some(entry.provider.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProviderIter {}

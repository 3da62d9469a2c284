//! Provider Registry System
//!
//! Compile-time registration of provider types that provider module files
//! can refer to by name. Uses the `linkme` crate: any crate linked into the
//! final binary can contribute entries, and module hosts look them up at
//! runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                   Provider Registration Flow                     │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  1. Crate defines:   #[linkme::distributed_slice(PROVIDER_...)]  │
//! │                      static ENTRY: Provider...Entry = ...        │
//! │                               ↓                                  │
//! │  2. Module file:     { "constructor": "json-formatter" }         │
//! │                               ↓                                  │
//! │  3. Host queries:    find_constructor("json-formatter")          │
//! │                               ↓                                  │
//! │  4. Loader builds:   a fresh instance per resolution pass        │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a constructor
//!
//! ```ignore
//! use servload_application::registry::{PROVIDER_CONSTRUCTORS, ProviderConstructorEntry};
//! use servload_domain::ProviderInstance;
//!
//! #[linkme::distributed_slice(PROVIDER_CONSTRUCTORS)]
//! static JSON_FORMATTER: ProviderConstructorEntry = ProviderConstructorEntry {
//!     name: "json-formatter",
//!     description: "Formats records as JSON lines",
//!     construct: || Ok(ProviderInstance::new(JsonFormatter::default())),
//! };
//! ```

use servload_domain::error::Result;
use servload_domain::{ProviderConstructor, ProviderInstance};

/// Registry entry for a constructible provider type
///
/// A module that names it is class-shaped: the loader builds a new instance
/// on every resolution pass.
pub struct ProviderConstructorEntry {
    /// Unique name referenced from provider module files
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Zero-argument constructor
    pub construct: fn() -> Result<ProviderInstance>,
}

/// Registry entry for a provider factory
///
/// A module that names it exports the factory's result as a plain value;
/// the factory runs once per module load.
pub struct ProviderFactoryEntry {
    /// Unique name referenced from provider module files
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory producing the exported value
    pub factory: fn() -> Result<ProviderInstance>,
}

/// Auto-collected constructor entries
#[linkme::distributed_slice]
pub static PROVIDER_CONSTRUCTORS: [ProviderConstructorEntry] = [..];

/// Auto-collected factory entries
#[linkme::distributed_slice]
pub static PROVIDER_FACTORIES: [ProviderFactoryEntry] = [..];

/// Constructor handle backed by a registry entry
#[derive(Clone, Copy)]
pub struct RegisteredConstructor {
    entry: &'static ProviderConstructorEntry,
}

impl RegisteredConstructor {
    /// Registry name of the constructor
    pub fn name(&self) -> &'static str {
        self.entry.name
    }
}

impl ProviderConstructor for RegisteredConstructor {
    fn construct(&self) -> Result<ProviderInstance> {
        (self.entry.construct)()
    }

    fn type_name(&self) -> &str {
        self.entry.name
    }
}

/// Find a registered constructor by name
pub fn find_constructor(name: &str) -> Option<RegisteredConstructor> {
    PROVIDER_CONSTRUCTORS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| RegisteredConstructor { entry })
}

/// Find a registered factory by name
pub fn find_factory(name: &str) -> Option<&'static ProviderFactoryEntry> {
    PROVIDER_FACTORIES.iter().find(|entry| entry.name == name)
}

/// List all registered constructors as `(name, description)`
pub fn list_constructors() -> Vec<(&'static str, &'static str)> {
    PROVIDER_CONSTRUCTORS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

/// List all registered factories as `(name, description)`
pub fn list_factories() -> Vec<(&'static str, &'static str)> {
    PROVIDER_FACTORIES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

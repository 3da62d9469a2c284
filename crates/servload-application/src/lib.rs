//! # servload application layer
//!
//! The provider-resolution core:
//!
//! - `loader` - [`ServiceLoader`], lazy cached resolution and reload
//! - `registry` - compile-time registry of named provider constructors and
//!   factories referenced by provider module files
//! - `host` - module hosts that need no filesystem access
//!
//! Filesystem collaborators (package scanning, file-backed module loading,
//! caller context) live in `servload-infrastructure`.

pub mod host;
pub mod loader;
pub mod registry;

pub use host::InMemoryModuleHost;
pub use loader::{LoaderEnvironment, LoaderTarget, ServiceLoader};

//! Module host implementations that need no filesystem access

pub mod memory;

pub use memory::InMemoryModuleHost;

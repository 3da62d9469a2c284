//! Configuration
//!
//! Typed configuration records and the figment-based loader that merges
//! defaults, a TOML file and `SERVLOAD__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ScanConfig};

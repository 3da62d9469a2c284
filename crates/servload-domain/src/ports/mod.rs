//! Domain Port Interfaces
//!
//! Boundary contracts between the loader and the environment it runs in.
//! The application layer drives these ports; the infrastructure layer
//! implements them against the filesystem.
//!
//! ## Organization
//!
//! - **scanner** - Enumerates installed packages and their manifests
//! - **caller** - Identifies the package responsible for a request
//! - **host** - Loads provider modules by absolute path

/// Caller identification port
pub mod caller;
/// Module loading port
pub mod host;
/// Package graph scanning port
pub mod scanner;

pub use caller::CallerIdentifier;
pub use host::{ModuleHost, ProviderConstructor};
pub use scanner::PackageGraphScanner;

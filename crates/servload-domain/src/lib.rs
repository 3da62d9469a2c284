//! # servload domain
//!
//! Types and port traits shared by every servload layer.
//!
//! - `error` - the workspace error type
//! - `value_objects` - declarations, package descriptors, provider values
//! - `ports` - contracts for scanning packages, identifying callers and
//!   loading provider modules

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::caller::{FixedCaller, NoCaller};
pub use ports::scanner::StaticPackageGraph;
pub use ports::{CallerIdentifier, ModuleHost, PackageGraphScanner, ProviderConstructor};
pub use value_objects::*;

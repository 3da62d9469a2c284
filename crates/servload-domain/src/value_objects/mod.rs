//! Value Objects
//!
//! Immutable records exchanged between the loader and its collaborators.

/// Service declarations and manifest sections
pub mod declaration;
/// Loader options and caller records
pub mod options;
/// Package descriptors and scan requests
pub mod package;
/// Provider values and resolved sets
pub mod provider;

pub use declaration::{ServiceDeclaration, ServicesSection, normalize_path};
pub use options::{CallerIdentificationOptions, CallerInfo, LoaderOptions};
pub use package::{PackageDescriptor, ScanRequest};
pub use provider::{ModuleExport, ProviderEntry, ProviderInstance, ProviderIter, ProviderSet};

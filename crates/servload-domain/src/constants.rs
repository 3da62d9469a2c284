//! Domain layer constants
//!
//! Contains constants that are part of the loading semantics. Configuration
//! defaults for the filesystem collaborators live in the infrastructure crate.

// ============================================================================
// LOADER CONSTANTS
// ============================================================================

/// Module name the loader identifies itself with.
///
/// Always merged into the caller-identification exclusions so the loader's
/// own frames are never reported as the calling package.
pub const LOADER_MODULE_NAME: &str = "servload";

/// Number of callers requested when inferring a package name
pub const CALLER_RESULT_LIMIT: usize = 1;

/// Message used when the calling package cannot be inferred
pub const UNRESOLVED_PACKAGE_MESSAGE: &str =
    "packageName must be specified as cannot resolve calling package";

/// Message used when the service name is missing
pub const MISSING_SERVICE_MESSAGE: &str = "serviceName must be specified";

// ============================================================================
// MANIFEST CONSTANTS
// ============================================================================

/// Top-level manifest field holding service declarations
pub const MANIFEST_SERVICES_FIELD: &str = "services";

/// Declaration record field holding the provider path
pub const DECLARATION_PATH_FIELD: &str = "path";

/// Manifest field holding the package name
pub const MANIFEST_NAME_FIELD: &str = "name";

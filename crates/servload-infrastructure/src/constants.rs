//! Infrastructure layer constants
//!
//! Defaults for configuration, logging and the filesystem collaborators.
//! Loading semantics constants are defined in `servload_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "servload.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "servload";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SERVLOAD";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SERVLOAD_LOG";

/// Default log file stem when file output has none
pub const DEFAULT_LOG_FILE_STEM: &str = "servload";

// ============================================================================
// PACKAGE SCAN CONSTANTS
// ============================================================================

/// Manifest file identifying a package directory
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Directory holding a package's installed dependencies
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Prefix of scoped package directories (`@scope/name`)
pub const SCOPED_PACKAGE_PREFIX: char = '@';

// ============================================================================
// PROVIDER MODULE CONSTANTS
// ============================================================================

/// Provider module field naming a registered constructor
pub const MODULE_CONSTRUCTOR_FIELD: &str = "constructor";

/// Provider module field naming a registered factory
pub const MODULE_FACTORY_FIELD: &str = "factory";

/// Caller frame module name used by the CLI entry point
pub const CLI_MODULE_NAME: &str = "servload-cli";

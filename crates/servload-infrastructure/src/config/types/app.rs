//! Application configuration root

use super::logging::LoggingConfig;
use super::scan::ScanConfig;
use serde::{Deserialize, Serialize};
use servload_domain::CallerIdentificationOptions;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Package scan settings
    pub scan: ScanConfig,

    /// Default caller identification options for loaders
    pub caller_identification: CallerIdentificationOptions,
}

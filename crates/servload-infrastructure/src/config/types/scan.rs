//! Package scan configuration types

use crate::constants::{DEFAULT_MANIFEST_FILE, DEFAULT_MODULES_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Package graph scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Manifest file that marks a package directory
    pub manifest_file: String,

    /// Directory under a package holding its installed dependencies
    pub modules_dir: String,

    /// Loader anchor; the current directory when unset
    pub anchor: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
            anchor: None,
        }
    }
}

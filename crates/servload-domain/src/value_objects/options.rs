//! Loader options and caller identification records

use crate::constants::{CALLER_RESULT_LIMIT, LOADER_MODULE_NAME};
use serde::{Deserialize, Serialize};

/// Options forwarded to the caller identifier
///
/// Also used as the identification request itself once normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallerIdentificationOptions {
    /// Module names whose frames are never reported as the caller
    pub exclusions: Vec<String>,
    /// Maximum number of callers to report
    pub limit: usize,
}

impl Default for CallerIdentificationOptions {
    fn default() -> Self {
        Self {
            exclusions: Vec::new(),
            limit: CALLER_RESULT_LIMIT,
        }
    }
}

impl CallerIdentificationOptions {
    /// Add an excluded module name
    pub fn with_exclusion<S: Into<String>>(mut self, module: S) -> Self {
        self.exclusions.push(module.into());
        self
    }

    /// Whether frames from `module` are excluded
    pub fn excludes(&self, module: &str) -> bool {
        self.exclusions.iter().any(|excluded| excluded == module)
    }

    /// Canonical form: limit forced to one, the loader's own module merged
    /// into the exclusions, duplicates dropped (first occurrence kept).
    pub fn normalized(&self) -> Self {
        let mut exclusions: Vec<String> = Vec::with_capacity(self.exclusions.len() + 1);
        let requested = self.exclusions.iter().map(String::as_str);
        for module in std::iter::once(LOADER_MODULE_NAME).chain(requested) {
            if !exclusions.iter().any(|existing| existing == module) {
                exclusions.push(module.to_string());
            }
        }
        Self {
            exclusions,
            limit: CALLER_RESULT_LIMIT,
        }
    }
}

/// Loader options
///
/// Only the recognized `callerIdentification` record is retained; unknown
/// keys are dropped when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Options forwarded to the caller identifier and the scanner
    pub caller_identification: CallerIdentificationOptions,
}

impl LoaderOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caller identification options
    pub fn with_caller_identification(mut self, options: CallerIdentificationOptions) -> Self {
        self.caller_identification = options;
        self
    }

    /// Canonical options record
    pub fn normalized(&self) -> Self {
        Self {
            caller_identification: self.caller_identification.normalized(),
        }
    }
}

/// A caller reported by a caller identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerInfo {
    /// Module (crate or component) name of the frame
    pub module: String,
    /// Package that owns the module, when known
    pub package_name: Option<String>,
}

impl CallerInfo {
    /// Create a caller record
    pub fn new<S: Into<String>>(module: S, package_name: Option<String>) -> Self {
        Self {
            module: module.into(),
            package_name,
        }
    }
}

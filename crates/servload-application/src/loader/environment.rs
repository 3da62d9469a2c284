//! Collaborators a loader resolves against

use servload_domain::{CallerIdentifier, ModuleHost, NoCaller, PackageGraphScanner};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Scanner, module host, caller identifier and anchor shared by loaders
///
/// The anchor is the loader's own install location: scans are rooted there,
/// not at the consumer's location. Cloning shares the collaborators.
#[derive(Clone)]
pub struct LoaderEnvironment {
    scanner: Arc<dyn PackageGraphScanner>,
    host: Arc<dyn ModuleHost>,
    caller: Arc<dyn CallerIdentifier>,
    anchor: PathBuf,
}

impl LoaderEnvironment {
    /// Create an environment with no caller identification
    pub fn new<P: Into<PathBuf>>(
        scanner: Arc<dyn PackageGraphScanner>,
        host: Arc<dyn ModuleHost>,
        anchor: P,
    ) -> Self {
        Self {
            scanner,
            host,
            caller: Arc::new(NoCaller),
            anchor: anchor.into(),
        }
    }

    /// Set the caller identifier used to infer omitted package names
    pub fn with_caller_identifier(mut self, caller: Arc<dyn CallerIdentifier>) -> Self {
        self.caller = caller;
        self
    }

    /// Package graph scanner
    pub fn scanner(&self) -> &dyn PackageGraphScanner {
        self.scanner.as_ref()
    }

    /// Module host
    pub fn host(&self) -> &dyn ModuleHost {
        self.host.as_ref()
    }

    /// Caller identifier
    pub fn caller_identifier(&self) -> &dyn CallerIdentifier {
        self.caller.as_ref()
    }

    /// Scan anchor
    pub fn anchor(&self) -> &Path {
        &self.anchor
    }
}

impl fmt::Debug for LoaderEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderEnvironment")
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

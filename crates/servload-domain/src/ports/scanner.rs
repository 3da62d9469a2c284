//! Package Graph Scanner Port
//!
//! Enumerates the packages visible from an anchor location together with
//! their parsed manifest data.

use crate::error::Result;
use crate::value_objects::{PackageDescriptor, ScanRequest};

/// Enumerates installed packages
///
/// Implementations must be synchronous: the loader calls `scan` once per
/// resolution pass and walks the returned descriptors in order.
pub trait PackageGraphScanner: Send + Sync {
    /// Packages visible from `request.anchor`, in scan order
    fn scan(&self, request: &ScanRequest) -> Result<Vec<PackageDescriptor>>;
}

impl<S: PackageGraphScanner + ?Sized> PackageGraphScanner for std::sync::Arc<S> {
    fn scan(&self, request: &ScanRequest) -> Result<Vec<PackageDescriptor>> {
        (**self).scan(request)
    }
}

/// Scanner over a fixed list of descriptors
///
/// Ignores the request and returns the same packages every time.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageGraph {
    packages: Vec<PackageDescriptor>,
}

impl StaticPackageGraph {
    /// Create a scanner returning `packages`
    pub fn new(packages: Vec<PackageDescriptor>) -> Self {
        Self { packages }
    }
}

impl PackageGraphScanner for StaticPackageGraph {
    fn scan(&self, _request: &ScanRequest) -> Result<Vec<PackageDescriptor>> {
        Ok(self.packages.clone())
    }
}

//! Caller Identifier Port
//!
//! Used only to default an omitted package name: reports which package's
//! code is responsible for the current request.

use crate::value_objects::{CallerIdentificationOptions, CallerInfo};

/// Identifies the calling package
pub trait CallerIdentifier: Send + Sync {
    /// Callers outside `request.exclusions`, innermost first, at most
    /// `request.limit` of them
    fn identify(&self, request: &CallerIdentificationOptions) -> Vec<CallerInfo>;
}

impl<C: CallerIdentifier + ?Sized> CallerIdentifier for std::sync::Arc<C> {
    fn identify(&self, request: &CallerIdentificationOptions) -> Vec<CallerInfo> {
        (**self).identify(request)
    }
}

/// Identifier that never finds a caller
///
/// Loaders built against it must be given an explicit package name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCaller;

impl CallerIdentifier for NoCaller {
    fn identify(&self, _request: &CallerIdentificationOptions) -> Vec<CallerInfo> {
        Vec::new()
    }
}

/// Identifier that always reports the same caller unless it is excluded
#[derive(Debug, Clone)]
pub struct FixedCaller {
    caller: CallerInfo,
}

impl FixedCaller {
    /// Report `module` owned by `package_name`
    pub fn new<M: Into<String>, P: Into<String>>(module: M, package_name: P) -> Self {
        Self {
            caller: CallerInfo::new(module, Some(package_name.into())),
        }
    }

    /// Report a caller with no resolvable package
    pub fn anonymous<M: Into<String>>(module: M) -> Self {
        Self {
            caller: CallerInfo::new(module, None),
        }
    }
}

impl CallerIdentifier for FixedCaller {
    fn identify(&self, request: &CallerIdentificationOptions) -> Vec<CallerInfo> {
        if request.limit == 0 || request.excludes(&self.caller.module) {
            return Vec::new();
        }
        vec![self.caller.clone()]
    }
}

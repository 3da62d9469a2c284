//! Service Loader
//!
//! A [`ServiceLoader`] is bound to one `(service name, package name)` pair.
//! Construction does no I/O. The first time providers are requested the
//! loader scans the package graph, collects every manifest declaration of
//! its service under its package, loads each distinct provider path once and
//! caches the ordered result. Later requests replay the cache, so the same
//! declaration always yields the same provider object until [`reload`] is
//! called.
//!
//! ## Example
//!
//! ```ignore
//! use servload_application::loader::{LoaderEnvironment, ServiceLoader};
//!
//! let loader = ServiceLoader::new(env, "formatter", "log-core")?;
//! for provider in loader.iter()? {
//!     if let Some(formatter) = provider.downcast::<JsonFormatter>() {
//!         formatter.format(&record);
//!     }
//! }
//! ```
//!
//! ## Concurrency
//!
//! The cache is published with an atomic swap. Two threads hitting an
//! unresolved loader at the same time may both run a resolution pass; each
//! builds its own set and the last one stored wins.
//!
//! [`reload`]: ServiceLoader::reload

pub mod environment;
pub mod instantiate;
pub mod resolve;
pub mod target;

pub use environment::LoaderEnvironment;
pub use instantiate::load_provider;
pub use resolve::resolve_providers;
pub use target::LoaderTarget;

use arc_swap::ArcSwapOption;
use servload_domain::constants::{MISSING_SERVICE_MESSAGE, UNRESOLVED_PACKAGE_MESSAGE};
use servload_domain::error::{Error, Result};
use servload_domain::{LoaderOptions, ProviderEntry, ProviderIter, ProviderSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Discovers, loads and caches the providers of one service
pub struct ServiceLoader {
    service_name: String,
    package_name: String,
    options: LoaderOptions,
    env: LoaderEnvironment,
    cache: ArcSwapOption<ProviderSet>,
}

impl ServiceLoader {
    /// Create a loader for `service_name`
    ///
    /// `target` is the owning package name, the options, both, or neither
    /// (see [`LoaderTarget`]). Without a package name the environment's
    /// caller identifier supplies one.
    pub fn new<S, T>(env: LoaderEnvironment, service_name: S, target: T) -> Result<Self>
    where
        S: Into<String>,
        T: Into<LoaderTarget>,
    {
        let service_name = service_name.into();
        if service_name.trim().is_empty() {
            return Err(Error::invalid_argument(MISSING_SERVICE_MESSAGE));
        }

        let LoaderTarget {
            package_name,
            options,
        } = target.into();
        let options = options.normalized();
        let package_name = match package_name {
            Some(package_name) => package_name,
            None => Self::calling_package(&env, &options)?,
        };

        Ok(Self {
            service_name,
            package_name,
            options,
            env,
            cache: ArcSwapOption::empty(),
        })
    }

    fn calling_package(env: &LoaderEnvironment, options: &LoaderOptions) -> Result<String> {
        env.caller_identifier()
            .identify(&options.caller_identification)
            .into_iter()
            .next()
            .and_then(|caller| caller.package_name)
            .filter(|package_name| !package_name.trim().is_empty())
            .ok_or_else(|| Error::invalid_argument(UNRESOLVED_PACKAGE_MESSAGE))
    }

    /// Bound service name
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Bound owning package name
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Normalized options
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Environment the loader resolves against
    pub fn environment(&self) -> &LoaderEnvironment {
        &self.env
    }

    /// Whether a resolved provider set is cached
    pub fn is_resolved(&self) -> bool {
        self.cache.load().is_some()
    }

    /// The resolved providers, resolving on first use
    ///
    /// A failed pass leaves the cache empty, so the next call retries.
    pub fn providers(&self) -> Result<Arc<ProviderSet>> {
        if let Some(cached) = self.cache.load_full() {
            return Ok(cached);
        }

        let resolved = Arc::new(resolve_providers(
            &self.env,
            &self.options,
            &self.package_name,
            &self.service_name,
        )?);
        self.cache.store(Some(Arc::clone(&resolved)));
        Ok(resolved)
    }

    /// Iterate over the providers in discovery order
    pub fn iter(&self) -> Result<ProviderIter> {
        self.providers().map(ProviderIter::new)
    }

    /// `(path, provider)` pairs in discovery order
    pub fn entries(&self) -> Result<Vec<ProviderEntry>> {
        Ok(self.providers()?.entries().to_vec())
    }

    /// Forget the resolved providers
    ///
    /// Instances already handed out are untouched, as is the module host's
    /// own cache. The next request runs a fresh resolution pass.
    pub fn reload(&self) {
        if self.cache.swap(None).is_some() {
            debug!(service = %self.service_name, "Provider cache cleared");
        }
    }
}

impl fmt::Display for ServiceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceLoader[{}]", self.service_name)
    }
}

impl fmt::Debug for ServiceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceLoader")
            .field("service_name", &self.service_name)
            .field("package_name", &self.package_name)
            .field("options", &self.options)
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

//! # servload
//!
//! Discover and load service providers declared in installed package
//! manifests.
//!
//! A package that wants to be extensible names a service; any installed
//! package can then declare a provider for it in its manifest:
//!
//! ```json
//! {
//!   "name": "log-json",
//!   "services": {
//!     "log-core": { "formatter": "./formatter.json" }
//!   }
//! }
//! ```
//!
//! and `log-core` iterates over every declared formatter:
//!
//! ```ignore
//! let formatters = servload::service_loader!("formatter")?;
//! for provider in formatters.iter()? {
//!     if let Some(formatter) = provider.downcast::<JsonFormatter>() {
//!         formatter.format(&record);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and ports
//! - `application` - the [`ServiceLoader`] and the provider registry
//! - `infrastructure` - filesystem scanning and module loading, config,
//!   logging

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use servload_domain::*;
}

/// Application layer - loader and provider registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use servload_application::*;
}

/// Infrastructure layer - filesystem collaborators, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use servload_infrastructure::*;
}

pub use application::registry;
pub use application::{LoaderEnvironment, LoaderTarget, ServiceLoader};
pub use domain::{
    CallerIdentificationOptions, Error, LoaderOptions, ModuleExport, ProviderInstance,
    ProviderIter, ProviderSet, Result,
};

use once_cell::sync::OnceCell;
use servload_infrastructure::bootstrap::{build_environment, default_options};
use servload_infrastructure::{AppConfig, ConfigLoader};

struct Defaults {
    env: LoaderEnvironment,
    options: LoaderOptions,
}

static DEFAULTS: OnceCell<Defaults> = OnceCell::new();

fn defaults() -> Result<&'static Defaults> {
    DEFAULTS.get_or_try_init(|| {
        let config = ConfigLoader::new().load()?;
        Ok(Defaults {
            env: build_environment(&config)?,
            options: default_options(&config),
        })
    })
}

fn install(defaults: Defaults) -> Result<()> {
    DEFAULTS
        .set(defaults)
        .map_err(|_| Error::configuration("servload default environment already initialised"))
}

/// Install the environment used by [`load`]
///
/// Must happen before the first [`load`]; otherwise the environment is
/// built from the loaded configuration on first use.
pub fn init(env: LoaderEnvironment) -> Result<()> {
    install(Defaults {
        env,
        options: LoaderOptions::default(),
    })
}

/// Install an environment and default options built from `config`
pub fn init_with_config(config: &AppConfig) -> Result<()> {
    install(Defaults {
        env: build_environment(config)?,
        options: default_options(config),
    })
}

/// The environment used by [`load`]
pub fn environment() -> Result<LoaderEnvironment> {
    defaults().map(|defaults| defaults.env.clone())
}

/// Create a loader for `service_name` in the default environment
///
/// `target` is the owning package name, loader options, both, or `()`.
///
/// A target whose options equal `LoaderOptions::default()` receives the
/// options installed by [`init_with_config`] (or read from the loaded
/// configuration), such as the configured caller exclusions. Any other
/// options are used as given, so pass non-default options to override the
/// configured ones. Use [`ServiceLoader::new`] with [`environment`] to
/// bypass the configured options entirely.
pub fn load<S, T>(service_name: S, target: T) -> Result<ServiceLoader>
where
    S: Into<String>,
    T: Into<LoaderTarget>,
{
    let defaults = defaults()?;
    let target = with_configured_options(target.into(), &defaults.options);
    ServiceLoader::new(defaults.env.clone(), service_name, target)
}

fn with_configured_options(mut target: LoaderTarget, configured: &LoaderOptions) -> LoaderTarget {
    if target.options == LoaderOptions::default() {
        target.options = configured.clone();
    }
    target
}

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Create a loader owned by the calling crate's package
///
/// The package name is taken from `CARGO_PKG_NAME` at the call site.
///
/// ```ignore
/// let formatters = servload::service_loader!("formatter")?;
/// let sinks = servload::service_loader!("sink", servload::LoaderOptions::new())?;
/// ```
#[macro_export]
macro_rules! service_loader {
    ($service:expr $(,)?) => {
        $crate::load($service, $crate::LoaderTarget::package(env!("CARGO_PKG_NAME")))
    };
    ($service:expr, $options:expr $(,)?) => {
        $crate::load(
            $service,
            $crate::LoaderTarget::package(env!("CARGO_PKG_NAME")).with_options($options),
        )
    };
}

//! One resolution pass over the package graph

use crate::loader::environment::LoaderEnvironment;
use crate::loader::instantiate::load_provider;
use servload_domain::error::Result;
use servload_domain::{LoaderOptions, ProviderSet, ScanRequest};
use tracing::{debug, trace};

/// Scan once, collect every declaration of `service_name` under
/// `package_name`, and load each distinct provider path once.
///
/// Packages are visited in scan order and declarations in manifest order;
/// the first package to declare a path owns it. Any load failure aborts the
/// whole pass.
pub fn resolve_providers(
    env: &LoaderEnvironment,
    options: &LoaderOptions,
    package_name: &str,
    service_name: &str,
) -> Result<ProviderSet> {
    let request = ScanRequest::new(env.anchor())
        .with_ancestors(true)
        .with_caller_identification(options.caller_identification.clone());
    let packages = env.scanner().scan(&request)?;

    let mut providers = ProviderSet::new();
    let mut duplicates = 0_usize;
    for package in &packages {
        let Some(services) = &package.services else {
            continue;
        };
        for declaration in services.declarations_for(package_name, service_name) {
            let path = declaration.resolve(&package.directory);
            if providers.contains(&path) {
                trace!(
                    package = %package.name,
                    path = %path.display(),
                    "Provider already loaded from an earlier package"
                );
                duplicates += 1;
                continue;
            }
            let provider = load_provider(env.host(), &path)?;
            trace!(package = %package.name, path = %path.display(), "Loaded provider");
            providers.insert(path, provider);
        }
    }

    debug!(
        service = service_name,
        package = package_name,
        scanned = packages.len(),
        providers = providers.len(),
        duplicates,
        "Resolved service providers"
    );
    Ok(providers)
}

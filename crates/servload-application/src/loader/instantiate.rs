//! Provider loading policy
//!
//! Constructor exports are instantiated with zero arguments on every call;
//! value exports are handed out unchanged. Host and constructor errors are
//! returned as-is.

use servload_domain::error::Result;
use servload_domain::{ModuleExport, ModuleHost, ProviderInstance};
use std::path::Path;
use tracing::trace;

/// Load the provider declared at `path`
pub fn load_provider(host: &dyn ModuleHost, path: &Path) -> Result<ProviderInstance> {
    match host.require(path)? {
        ModuleExport::Constructor(constructor) => {
            trace!(
                path = %path.display(),
                constructor = constructor.type_name(),
                "Instantiating provider"
            );
            constructor.construct()
        }
        ModuleExport::Value(value) => {
            trace!(path = %path.display(), "Using exported provider value");
            Ok(value)
        }
    }
}

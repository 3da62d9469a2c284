//! Environment bootstrap
//!
//! Composition root wiring the filesystem collaborators into a
//! [`LoaderEnvironment`].
//!
//! ```text
//! AppConfig → FsPackageScanner ─┐
//!           → FileModuleHost ───┼→ LoaderEnvironment → ServiceLoader
//!           → CallerContext ────┘
//! ```

use crate::caller::CallerContext;
use crate::config::{AppConfig, ScanConfig};
use crate::error_ext::ErrorContext;
use crate::host::FileModuleHost;
use crate::scanner::FsPackageScanner;
use servload_application::LoaderEnvironment;
use servload_domain::error::Result;
use servload_domain::{LoaderOptions, ScanRequest};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Build the loader environment described by `config`
pub fn build_environment(config: &AppConfig) -> Result<LoaderEnvironment> {
    let anchor = resolve_anchor(&config.scan)?;
    debug!(anchor = %anchor.display(), "Building loader environment");

    Ok(LoaderEnvironment::new(
        Arc::new(FsPackageScanner::from_config(&config.scan)),
        Arc::new(FileModuleHost::new()),
        anchor,
    )
    .with_caller_identifier(Arc::new(CallerContext::new())))
}

/// Default loader options carried by `config`
pub fn default_options(config: &AppConfig) -> LoaderOptions {
    LoaderOptions::new().with_caller_identification(config.caller_identification.clone())
}

/// Configured anchor, or the current directory when unset
pub fn resolve_anchor(config: &ScanConfig) -> Result<PathBuf> {
    match &config.anchor {
        Some(anchor) => Ok(anchor.clone()),
        None => std::env::current_dir().io_context("Failed to determine current directory"),
    }
}

/// Name of the package nearest to the environment's anchor, if any
pub fn anchor_package_name(env: &LoaderEnvironment) -> Result<Option<String>> {
    let request = ScanRequest::new(env.anchor()).with_ancestors(false);
    Ok(env
        .scanner()
        .scan(&request)?
        .into_iter()
        .next()
        .map(|package| package.name))
}

//! Filesystem package graph scanner
//!
//! Finds the package enclosing the scan anchor, optionally climbs to the
//! outermost enclosing package, then walks the installed dependency tree
//! depth-first in pre-order. Directories under a modules directory are
//! visited in name order and scoped `@scope/name` directories are expanded.

use crate::config::ScanConfig;
use crate::constants::{DEFAULT_MANIFEST_FILE, DEFAULT_MODULES_DIR, SCOPED_PACKAGE_PREFIX};
use crate::error_ext::ErrorContext;
use serde_json::Value;
use servload_domain::error::Result;
use servload_domain::{PackageDescriptor, PackageGraphScanner, ScanRequest, normalize_path};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Package graph scanner over an installed `node_modules`-style tree
#[derive(Debug, Clone)]
pub struct FsPackageScanner {
    manifest_file: String,
    modules_dir: String,
}

impl Default for FsPackageScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FsPackageScanner {
    /// Create a scanner with the default manifest and modules directory names
    pub fn new() -> Self {
        Self {
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
        }
    }

    /// Create a scanner from configuration
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            manifest_file: config.manifest_file.clone(),
            modules_dir: config.modules_dir.clone(),
        }
    }

    /// Set the manifest file name
    pub fn with_manifest_file<S: Into<String>>(mut self, manifest_file: S) -> Self {
        self.manifest_file = manifest_file.into();
        self
    }

    /// Set the modules directory name
    pub fn with_modules_dir<S: Into<String>>(mut self, modules_dir: S) -> Self {
        self.modules_dir = modules_dir.into();
        self
    }

    fn is_package(&self, dir: &Path) -> bool {
        dir.join(&self.manifest_file).is_file()
    }

    /// Packages enclosing `anchor`, innermost first
    fn enclosing_packages(&self, anchor: &Path) -> Vec<PathBuf> {
        let anchor = fs::canonicalize(anchor)
            .or_else(|_| std::path::absolute(anchor))
            .map_or_else(|_| normalize_path(anchor), |path| normalize_path(&path));
        anchor
            .ancestors()
            .filter(|dir| self.is_package(dir))
            .map(Path::to_path_buf)
            .collect()
    }

    /// Read a package manifest; `None` when it cannot be parsed
    fn read_manifest(&self, dir: &Path) -> Option<Value> {
        let path = dir.join(&self.manifest_file);
        let parsed = fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|content| {
                serde_json::from_str::<Value>(&content).map_err(|err| err.to_string())
            });
        match parsed {
            Ok(manifest) => Some(manifest),
            Err(reason) => {
                warn!(manifest = %path.display(), %reason, "Skipping unreadable package manifest");
                None
            }
        }
    }

    /// Directories of the packages installed directly under `dir`, in name order
    fn installed_packages(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let modules = dir.join(&self.modules_dir);
        let mut packages = Vec::new();
        for entry in sorted_subdirectories(&modules)? {
            let is_scope = entry
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(SCOPED_PACKAGE_PREFIX));
            if is_scope {
                packages.extend(
                    sorted_subdirectories(&entry)?
                        .into_iter()
                        .filter(|scoped| self.is_package(scoped)),
                );
            } else if self.is_package(&entry) {
                packages.push(entry);
            }
        }
        Ok(packages)
    }

    fn walk(
        &self,
        dir: &Path,
        visited: &mut HashSet<PathBuf>,
        packages: &mut Vec<PackageDescriptor>,
    ) -> Result<()> {
        let canonical = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if !visited.insert(canonical.clone()) {
            return Ok(());
        }

        if let Some(manifest) = self.read_manifest(&canonical) {
            let descriptor = PackageDescriptor::from_manifest(&canonical, &manifest);
            trace!(package = %descriptor.name, directory = %canonical.display(), "Found package");
            packages.push(descriptor);
        }

        for child in self.installed_packages(&canonical)? {
            self.walk(&child, visited, packages)?;
        }
        Ok(())
    }
}

impl PackageGraphScanner for FsPackageScanner {
    fn scan(&self, request: &ScanRequest) -> Result<Vec<PackageDescriptor>> {
        let enclosing = self.enclosing_packages(&request.anchor);
        let Some(nearest) = enclosing.first() else {
            debug!(anchor = %request.anchor.display(), "No enclosing package found");
            return Ok(Vec::new());
        };

        // Roots are walked outermost first; packages already reached through
        // an outer tree are not visited again.
        let roots: Vec<&PathBuf> = if request.include_ancestors {
            enclosing.iter().rev().collect()
        } else {
            vec![nearest]
        };

        let mut visited = HashSet::new();
        let mut packages = Vec::new();
        for root in roots {
            self.walk(root, &mut visited, &mut packages)?;
        }

        debug!(
            anchor = %request.anchor.display(),
            packages = packages.len(),
            "Package graph scanned"
        );
        Ok(packages)
    }
}

/// Subdirectories of `dir` sorted by name, skipping dot-directories
///
/// A missing directory has no subdirectories.
fn sorted_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to list {}", dir.display()));
        }
    };

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let path = entry.path();
        if !hidden && path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

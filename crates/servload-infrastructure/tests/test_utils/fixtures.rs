//! Package tree fixtures
//!
//! ## Usage
//!
//! ```rust,ignore
//! let tree = PackageTree::new();
//! tree.package("", json!({ "name": "app" }));
//! tree.package("node_modules/@scope/lib", json!({ "name": "@scope/lib" }));
//! tree.file("node_modules/@scope/lib/provider.json", r#"{ "level": "info" }"#);
//! ```

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A package tree rooted in a temporary directory
pub struct PackageTree {
    dir: TempDir,
}

impl Default for PackageTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Canonical root directory
    pub fn root(&self) -> PathBuf {
        fs::canonicalize(self.dir.path()).expect("canonicalize temp dir")
    }

    /// Absolute path of `relative` under the root
    pub fn path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.root()
        } else {
            self.root().join(relative)
        }
    }

    /// Write a `package.json` with `manifest` into `relative`
    pub fn package(&self, relative: &str, manifest: Value) -> PathBuf {
        let body = serde_json::to_string_pretty(&manifest).expect("serialize manifest");
        self.raw_manifest(relative, &body)
    }

    /// Write a `package.json` with arbitrary contents into `relative`
    pub fn raw_manifest(&self, relative: &str, body: &str) -> PathBuf {
        let dir = self.path(relative);
        fs::create_dir_all(&dir).expect("create package dir");
        fs::write(dir.join("package.json"), body).expect("write manifest");
        dir
    }

    /// Write a file at `relative`, creating parent directories
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Copy the directory at `from` to `to`, both relative to the root
    pub fn copy(&self, from: &str, to: &str) -> PathBuf {
        let target = self.path(to);
        copy_tree(&self.path(from), &target);
        target
    }
}

/// Recursively copy a directory tree
pub fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("create target dir");
    for entry in fs::read_dir(from).expect("read source dir") {
        let entry = entry.expect("read entry");
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("copy file");
        }
    }
}

/// Package names in scan order
pub fn names(packages: &[servload_domain::PackageDescriptor]) -> Vec<String> {
    packages.iter().map(|package| package.name.clone()).collect()
}

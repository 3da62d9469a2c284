//! Error extension utilities
//!
//! Context extension methods that turn foreign errors into domain errors.

use servload_domain::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use servload_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read {}", path.display()))?;
///
/// let document: serde_json::Value = serde_json::from_str(&content)
///     .module_context(&path, "invalid JSON")?;
/// ```
pub trait ErrorContext<T> {
    /// Add lazily built context, converting the error to a scan error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Attribute the failure to the provider module at `path`
    fn module_context<P, C>(self, path: P, context: C) -> Result<T>
    where
        P: AsRef<Path>,
        C: fmt::Display,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::scan_with_source(format!("{}: {err}", f()), err))
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }

    fn module_context<P, C>(self, path: P, context: C) -> Result<T>
    where
        P: AsRef<Path>,
        C: fmt::Display,
        Self: Sized,
    {
        self.map_err(|err| Error::module_parse_with_source(path, format!("{context}: {err}"), err))
    }
}

//! Error handling types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for servload
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// No provider module exists at the requested path
    #[error("Module not found: {}{}", path.display(), detail_suffix(detail.as_deref()))]
    ModuleNotFound {
        /// Absolute path that was requested
        path: PathBuf,
        /// Optional extra detail (e.g. unknown registry name)
        detail: Option<String>,
    },

    /// A provider module exists but could not be read or parsed
    #[error("Failed to load module {}: {message}", path.display())]
    ModuleParse {
        /// Absolute path of the module
        path: PathBuf,
        /// Description of the parse failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A constructible provider failed while being instantiated
    #[error("Failed to construct provider from {}: {message}", path.display())]
    ProviderConstruction {
        /// Absolute path of the module exporting the constructor
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// Package graph scanning failed
    #[error("Package scan error: {message}")]
    Scan {
        /// Description of the scan failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|detail| format!(" ({detail})")).unwrap_or_default()
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a scan error with source
    pub fn scan_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Scan {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Provider module error creation methods
impl Error {
    /// Create a module not found error
    pub fn module_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::ModuleNotFound {
            path: path.as_ref().to_path_buf(),
            detail: None,
        }
    }

    /// Create a module not found error with extra detail
    pub fn module_not_found_with_detail<P: AsRef<Path>, S: Into<String>>(
        path: P,
        detail: S,
    ) -> Self {
        Self::ModuleNotFound {
            path: path.as_ref().to_path_buf(),
            detail: Some(detail.into()),
        }
    }

    /// Create a module parse error
    pub fn module_parse<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Self::ModuleParse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a module parse error with source
    pub fn module_parse_with_source<
        P: AsRef<Path>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        path: P,
        message: S,
        source: E,
    ) -> Self {
        Self::ModuleParse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a provider construction error
    pub fn provider_construction<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Self::ProviderConstruction {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Whether this error was raised while loading a provider module
    pub fn is_provider_load_failure(&self) -> bool {
        matches!(
            self,
            Self::ModuleNotFound { .. }
                | Self::ModuleParse { .. }
                | Self::ProviderConstruction { .. }
        )
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

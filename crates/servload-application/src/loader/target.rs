//! Package target argument normalization
//!
//! The package name is optional and the options record may be passed in its
//! place; every accepted shape converts into a [`LoaderTarget`].

use servload_domain::LoaderOptions;

/// Package name (possibly absent) and options for a new loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderTarget {
    /// Owning package name; `None` means "infer from the caller"
    pub package_name: Option<String>,
    /// Loader options
    pub options: LoaderOptions,
}

impl LoaderTarget {
    /// Target an explicit package
    pub fn package<S: Into<String>>(package_name: S) -> Self {
        Self::from(package_name.into())
    }

    /// Infer the package from the caller
    pub fn inferred() -> Self {
        Self::default()
    }

    /// Replace the options
    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }
}

fn non_empty(package_name: String) -> Option<String> {
    if package_name.trim().is_empty() {
        None
    } else {
        Some(package_name)
    }
}

impl From<()> for LoaderTarget {
    fn from((): ()) -> Self {
        Self::default()
    }
}

impl From<String> for LoaderTarget {
    fn from(package_name: String) -> Self {
        Self {
            package_name: non_empty(package_name),
            options: LoaderOptions::default(),
        }
    }
}

impl From<&str> for LoaderTarget {
    fn from(package_name: &str) -> Self {
        Self::from(package_name.to_string())
    }
}

impl From<&String> for LoaderTarget {
    fn from(package_name: &String) -> Self {
        Self::from(package_name.clone())
    }
}

impl From<Option<String>> for LoaderTarget {
    fn from(package_name: Option<String>) -> Self {
        package_name.map(Self::from).unwrap_or_default()
    }
}

impl From<Option<&str>> for LoaderTarget {
    fn from(package_name: Option<&str>) -> Self {
        Self::from(package_name.map(str::to_string))
    }
}

/// Options in the package position: package name absent
impl From<LoaderOptions> for LoaderTarget {
    fn from(options: LoaderOptions) -> Self {
        Self {
            package_name: None,
            options,
        }
    }
}

impl From<(String, LoaderOptions)> for LoaderTarget {
    fn from((package_name, options): (String, LoaderOptions)) -> Self {
        Self::from(package_name).with_options(options)
    }
}

impl From<(&str, LoaderOptions)> for LoaderTarget {
    fn from((package_name, options): (&str, LoaderOptions)) -> Self {
        Self::from(package_name).with_options(options)
    }
}

impl From<(Option<&str>, LoaderOptions)> for LoaderTarget {
    fn from((package_name, options): (Option<&str>, LoaderOptions)) -> Self {
        Self::from(package_name).with_options(options)
    }
}

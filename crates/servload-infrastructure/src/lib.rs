//! # servload infrastructure layer
//!
//! Filesystem-backed collaborators for the loader plus the ambient stack:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`scanner`] | Package graph scanning over installed package trees |
//! | [`host`] | Provider module loading from JSON/TOML documents |
//! | [`caller`] | Explicit per-thread caller frames |
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Tracing subscriber setup |
//! | [`bootstrap`] | Environment composition root |

pub mod bootstrap;
pub mod caller;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod host;
pub mod logging;
pub mod scanner;

pub use bootstrap::build_environment;
pub use caller::{CallFrame, CallerContext, FrameGuard};
pub use config::{AppConfig, ConfigLoader, LoggingConfig, ScanConfig};
pub use error_ext::ErrorContext;
pub use host::FileModuleHost;
pub use scanner::FsPackageScanner;

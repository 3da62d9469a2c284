//! Configuration types module

pub mod app;
pub mod logging;
pub mod scan;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use scan::ScanConfig;

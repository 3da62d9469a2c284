//! Package graph scanners

pub mod fs;

pub use fs::FsPackageScanner;

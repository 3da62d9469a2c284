//! Module hosts backed by the filesystem

pub mod file;

pub use file::FileModuleHost;

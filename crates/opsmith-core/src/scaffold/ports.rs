//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold engine needs from external systems.
//! The `opsmith-adapters` crate provides implementations.

use std::path::Path;

use super::error::ScaffoldError;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `opsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `opsmith_adapters::filesystem::MemoryFilesystem` (testing / golden capture)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), ScaffoldError>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), ScaffoldError>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

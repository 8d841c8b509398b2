//! Storage port for the configuration source and derived artifacts.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading the configuration source and writing generated files.
///
/// Relative paths are resolved against the store's root.
pub trait ConfigStore {
    /// Read the configuration source. Missing files map to `AppError::ConfigNotFound`.
    fn read_config(&self, path: &Path) -> Result<String, AppError>;

    /// Write a generated artifact, creating parent directories as needed.
    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;
}

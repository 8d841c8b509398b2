use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Filesystem-based configuration store.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    root: PathBuf,
}

impl FilesystemConfigStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn read_config(&self, path: &Path) -> Result<String, AppError> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AppError::ConfigNotFound(path.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, content)?;
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }
}

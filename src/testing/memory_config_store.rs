//! In-memory configuration store for command tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ConfigStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the store.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Read back a file written through the port.
    pub fn contents(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read_config(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::ConfigNotFound(path.to_path_buf()))
    }

    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

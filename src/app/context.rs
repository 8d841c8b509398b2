use std::path::{Path, PathBuf};

use crate::domain::{AppError, ConfigurationDocument, load};
use crate::ports::ConfigStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigStore> {
    store: S,
    config_path: PathBuf,
}

impl<S: ConfigStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, config_path: impl Into<PathBuf>) -> Self {
        Self { store, config_path: config_path.into() }
    }

    /// Get a reference to the configuration store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Path of the configuration source.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read and parse the configuration source. Nothing is cached between calls.
    pub fn load_document(&self) -> Result<ConfigurationDocument, AppError> {
        let source = self.store.read_config(&self.config_path)?;
        let doc = load(&source)?;
        tracing::debug!(
            path = %self.config_path.display(),
            functions = doc.functions.len(),
            "loaded trigger configuration"
        );
        Ok(doc)
    }
}

//! Shared testing harness for `trigctl` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default configuration path inside the work directory.
    pub(crate) fn config_path(&self) -> PathBuf {
        self.work_dir.join("config/triggers.yaml")
    }

    /// Write the configuration source at the default path.
    pub(crate) fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config directory");
        fs::write(&path, content).expect("Failed to write triggers.yaml");
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Build a command for invoking the compiled `trigctl` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("trigctl").expect("Failed to locate trigctl binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("TRIGCTL_CONFIG")
            .env_remove("TRIGCTL_LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}

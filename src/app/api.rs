//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Relative configuration paths resolve against the
//! current directory.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::adapters::filesystem_config_store::FilesystemConfigStore;
use crate::app::AppContext;
use crate::app::commands::{check, env, export, init, plan, resolve, show};
use crate::domain::FunctionSummary;

pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::app::commands::export::{ExportOptions, ExportOutcome, ExportTarget};
pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::app::commands::plan::PlanOutcome;
pub use crate::app::commands::resolve::{ResolveOptions, ResolveOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` rooted at the current directory.
fn create_context(config_path: &Path) -> Result<AppContext<FilesystemConfigStore>, AppError> {
    let store = FilesystemConfigStore::current()?;
    Ok(AppContext::new(store, config_path))
}

/// Create an `AppContext` rooted at `root`.
fn create_context_at(root: PathBuf, config_path: &Path) -> AppContext<FilesystemConfigStore> {
    AppContext::new(FilesystemConfigStore::new(root), config_path)
}

/// Load and validate the configuration.
pub fn check(config_path: &Path, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(&create_context(config_path)?, options)
}

/// Load, validate, and resolve the enabled triggers per function.
pub fn resolve(config_path: &Path, options: ResolveOptions) -> Result<ResolveOutcome, AppError> {
    resolve::execute(&create_context(config_path)?, options)
}

/// Summarize the declared triggers of one function.
pub fn show(config_path: &Path, function: &str) -> Result<FunctionSummary, AppError> {
    show::execute(&create_context(config_path)?, function)
}

/// Export the document or the resolved view.
pub fn export(config_path: &Path, options: ExportOptions) -> Result<ExportOutcome, AppError> {
    export::execute(&create_context(config_path)?, options)
}

/// Export relative to `root` instead of the current directory.
pub fn export_at(
    root: impl Into<PathBuf>,
    config_path: &Path,
    options: ExportOptions,
) -> Result<ExportOutcome, AppError> {
    export::execute(&create_context_at(root.into(), config_path), options)
}

/// List the resource types the infrastructure layer will declare.
pub fn plan(config_path: &Path, allow_invalid: bool) -> Result<PlanOutcome, AppError> {
    plan::execute(&create_context(config_path)?, allow_invalid)
}

/// Settings of one environment.
pub fn environment(config_path: &Path, name: &str) -> Result<Value, AppError> {
    env::execute(&create_context(config_path)?, name)
}

/// Write the starter configuration.
pub fn init(config_path: &Path, options: InitOptions) -> Result<InitOutcome, AppError> {
    init::execute(&create_context(config_path)?, options)
}

/// Write the starter configuration relative to `root`.
pub fn init_at(
    root: impl Into<PathBuf>,
    config_path: &Path,
    options: InitOptions,
) -> Result<InitOutcome, AppError> {
    init::execute(&create_context_at(root.into(), config_path), options)
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::ConfigFormatError;
use crate::domain::export::ExportError;
use crate::domain::resolve::MalformedTriggerError;

/// Library-wide error type for trigctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Trigger configuration file missing at the expected path.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Refusing to overwrite an existing configuration file.
    #[error("Configuration file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// The configuration document has an invalid top-level shape.
    #[error(transparent)]
    ConfigFormat(#[from] ConfigFormatError),

    /// A trigger entry is not a well-formed mapping.
    #[error(transparent)]
    MalformedTrigger(#[from] MalformedTriggerError),

    /// Serialization to the export format failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Validation reported blocking issues.
    #[error("Configuration validation failed with {errors} error(s)")]
    ValidationFailed { errors: usize },

    /// Function key not present in the configuration.
    #[error("Function '{0}' not found in configuration")]
    FunctionNotFound(String),

    /// Environment not present in the configuration.
    #[error("Environment '{0}' not found in configuration")]
    EnvironmentNotFound(String),

    /// Function key is not usable as an identifier.
    #[error(
        "Invalid function key '{0}': must start with a letter and contain only lowercase letters, digits, or underscores"
    )]
    InvalidFunctionKey(String),

    /// Embedded template failed to render.
    #[error("Template rendering failed: {0}")]
    Template(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ConfigFormat(_)
            | AppError::MalformedTrigger(_)
            | AppError::ValidationFailed { .. }
            | AppError::InvalidFunctionKey(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_)
            | AppError::FunctionNotFound(_)
            | AppError::EnvironmentNotFound(_) => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Export(_) | AppError::Template(_) => io::ErrorKind::InvalidData,
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}

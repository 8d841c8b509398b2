use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::validation_gate;
use crate::domain::{AppError, ExportFormat, ExportScope, export, resolve};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub scope: ExportScope,
    pub format: ExportFormat,
    pub target: ExportTarget,
    /// Export the resolved view even when validation reports errors.
    pub allow_invalid: bool,
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub content: String,
    /// `None` when the content is meant for stdout.
    pub destination: Option<PathBuf>,
}

pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    options: ExportOptions,
) -> Result<ExportOutcome, AppError> {
    let doc = ctx.load_document()?;

    let content = match options.scope {
        ExportScope::Document => export(&doc, options.format)?,
        ExportScope::Resolved => {
            validation_gate(&doc, options.allow_invalid)?;
            let resolved = resolve(&doc)?;
            export(&resolved, options.format)?
        }
    };

    let destination = match options.target {
        ExportTarget::Stdout => None,
        ExportTarget::File(path) => {
            ctx.store().write_artifact(&path, &content)?;
            tracing::info!(
                path = %path.display(),
                format = %options.format,
                "exported trigger configuration"
            );
            Some(path)
        }
    };

    Ok(ExportOutcome { content, destination })
}
